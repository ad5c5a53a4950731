//! Route definitions for the `/book` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::book;
use crate::state::AppState;

/// Routes mounted at `/book`.
///
/// ```text
/// POST /          -> create
/// GET  /          -> list (title/year filters, skip/limit)
/// GET  /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list).post(book::create))
        .route("/{id}", get(book::get_by_id))
}
