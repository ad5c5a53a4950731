//! Route definitions for the `/author` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Routes mounted at `/author`.
///
/// ```text
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(author::create))
        .route("/{id}", get(author::get_by_id).delete(author::delete))
}
