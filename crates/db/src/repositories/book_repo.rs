//! Repository instantiation for the `books` table.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use libretto_core::types::DbId;

use crate::models::book::{Book, BookFilter, CreateBook};
use crate::repositories::crud::{BindFields, Entity, Insertable, KeyOf, Repo, SearchKey};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author_id, title, publish_year, created_at, updated_at";

impl Entity for Book {
    const TABLE: &'static str = "books";
    const COLUMNS: &'static str = COLUMNS;
}

impl Insertable for Book {
    type Create = CreateBook;

    fn insert_sql() -> String {
        format!(
            "INSERT INTO books (author_id, title, publish_year)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        )
    }
}

impl BindFields for CreateBook {
    fn bind_fields<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(self.author_id)
            .bind(self.title.as_str())
            .bind(self.publish_year)
    }
}

/// Searchable columns of the `books` table. `Title` compares against the
/// stored (sanitized) form.
#[derive(Debug, Clone, Copy)]
pub enum BookKey<'a> {
    Id(DbId),
    Title(&'a str),
}

impl SearchKey for BookKey<'_> {
    fn column(&self) -> &'static str {
        match self {
            BookKey::Id(_) => "id",
            BookKey::Title(_) => "title",
        }
    }

    fn bind_value<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match *self {
            BookKey::Id(id) => query.bind(id),
            BookKey::Title(value) => query.bind(value),
        }
    }
}

impl KeyOf<Book> for BookKey<'_> {}

/// CRUD operations for books.
pub type BookRepo = Repo<Book>;

impl Repo<Book> {
    /// List books with optional filters, ordered by id ascending.
    ///
    /// `title_contains` is a case-insensitive substring match; callers are
    /// expected to normalize the needle the same way stored titles are.
    /// An empty result set is returned as-is; the service layer decides
    /// what that means.
    pub async fn list(
        pool: &PgPool,
        filter: &BookFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
               AND ($2::int4 IS NULL OR publish_year = $2)
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(filter.title_contains.as_deref())
            .bind(filter.publish_year)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
