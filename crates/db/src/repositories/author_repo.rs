//! Repository instantiation for the `authors` table.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use libretto_core::types::DbId;

use crate::models::author::{Author, CreateAuthor};
use crate::repositories::crud::{BindFields, Entity, Insertable, KeyOf, Repo, SearchKey};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

impl Entity for Author {
    const TABLE: &'static str = "authors";
    const COLUMNS: &'static str = COLUMNS;
}

impl Insertable for Author {
    type Create = CreateAuthor;

    fn insert_sql() -> String {
        format!(
            "INSERT INTO authors (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        )
    }
}

impl BindFields for CreateAuthor {
    fn bind_fields<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(self.name.as_str())
    }
}

/// Searchable columns of the `authors` table. `Name` compares against the
/// stored (sanitized) form.
#[derive(Debug, Clone, Copy)]
pub enum AuthorKey<'a> {
    Id(DbId),
    Name(&'a str),
}

impl SearchKey for AuthorKey<'_> {
    fn column(&self) -> &'static str {
        match self {
            AuthorKey::Id(_) => "id",
            AuthorKey::Name(_) => "name",
        }
    }

    fn bind_value<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match *self {
            AuthorKey::Id(id) => query.bind(id),
            AuthorKey::Name(value) => query.bind(value),
        }
    }
}

impl KeyOf<Author> for AuthorKey<'_> {}

/// CRUD operations for authors.
pub type AuthorRepo = Repo<Author>;
