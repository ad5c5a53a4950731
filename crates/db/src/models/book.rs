//! Book entity model and DTOs.

use libretto_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full book row from the `books` table. `title` is stored sanitized.
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub publish_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Book representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub publish_year: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
            publish_year: book.publish_year,
        }
    }
}

/// DTO for inserting a new book. `title` must already be sanitized.
#[derive(Debug)]
pub struct CreateBook {
    pub author_id: DbId,
    pub title: String,
    pub publish_year: i32,
}

/// Optional filters applied by the book list query.
///
/// `title_contains` matches case-insensitively against the stored
/// (sanitized) title; `publish_year` is an exact match.
#[derive(Debug, Default)]
pub struct BookFilter {
    pub title_contains: Option<String>,
    pub publish_year: Option<i32>,
}
