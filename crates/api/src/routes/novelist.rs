//! Route definitions for the `/novelist` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::novelist;
use crate::state::AppState;

/// Routes mounted at `/novelist`.
///
/// ```text
/// POST /          -> create
/// GET  /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(novelist::create))
        .route("/{id}", get(novelist::get_by_id))
}
