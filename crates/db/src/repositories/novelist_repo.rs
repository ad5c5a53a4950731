//! Repository instantiation for the `novelists` table.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use libretto_core::types::DbId;

use crate::models::novelist::{CreateNovelist, Novelist};
use crate::repositories::crud::{BindFields, Entity, Insertable, KeyOf, Repo, SearchKey};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

impl Entity for Novelist {
    const TABLE: &'static str = "novelists";
    const COLUMNS: &'static str = COLUMNS;
}

impl Insertable for Novelist {
    type Create = CreateNovelist;

    fn insert_sql() -> String {
        format!(
            "INSERT INTO novelists (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        )
    }
}

impl BindFields for CreateNovelist {
    fn bind_fields<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(self.name.as_str())
    }
}

/// Searchable columns of the `novelists` table. `Name` compares against
/// the stored (sanitized) form.
#[derive(Debug, Clone, Copy)]
pub enum NovelistKey<'a> {
    Id(DbId),
    Name(&'a str),
}

impl SearchKey for NovelistKey<'_> {
    fn column(&self) -> &'static str {
        match self {
            NovelistKey::Id(_) => "id",
            NovelistKey::Name(_) => "name",
        }
    }

    fn bind_value<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match *self {
            NovelistKey::Id(id) => query.bind(id),
            NovelistKey::Name(value) => query.bind(value),
        }
    }
}

impl KeyOf<Novelist> for NovelistKey<'_> {}

/// CRUD operations for novelists.
pub type NovelistRepo = Repo<Novelist>;
