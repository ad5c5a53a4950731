//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?skip=&limit=`).
///
/// Values are clamped via `libretto_core::pagination` before reaching
/// the repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
