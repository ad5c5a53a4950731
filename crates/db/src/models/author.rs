//! Author entity model and DTOs.

use libretto_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full author row from the `authors` table. `name` is stored sanitized.
#[derive(Debug, Clone, FromRow)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Author representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: DbId,
    pub name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

/// DTO for inserting a new author. `name` must already be sanitized.
#[derive(Debug)]
pub struct CreateAuthor {
    pub name: String,
}
