//! Novelist entity model and DTOs.

use libretto_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full novelist row from the `novelists` table. `name` is stored sanitized.
#[derive(Debug, Clone, FromRow)]
pub struct Novelist {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Novelist representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct NovelistResponse {
    pub id: DbId,
    pub name: String,
}

impl From<Novelist> for NovelistResponse {
    fn from(novelist: Novelist) -> Self {
        Self {
            id: novelist.id,
            name: novelist.name,
        }
    }
}

/// DTO for inserting a new novelist. `name` must already be sanitized.
#[derive(Debug)]
pub struct CreateNovelist {
    pub name: String,
}
