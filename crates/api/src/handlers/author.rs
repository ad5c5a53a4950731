//! Handlers for the `/author` resource. All operations require auth.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use libretto_core::error::CoreError;
use libretto_core::sanitize::sanitize;
use libretto_core::types::DbId;
use libretto_db::models::author::{AuthorResponse, CreateAuthor};
use libretto_db::repositories::{AuthorKey, AuthorRepo, DeleteOutcome};

use crate::error::{AppError, AppResult};
use crate::handlers::account::MessageResponse;
use crate::middleware::auth::CurrentAccount;
use crate::state::AppState;

/// Request body for `POST /author`.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
}

/// POST /api/v1/author
///
/// Create a new author. The name is sanitized before the uniqueness
/// check, so `"J.R.R. Tolkien"` and `"jrr tolkien"` are the same author.
pub async fn create(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Json(input): Json<CreateAuthorRequest>,
) -> AppResult<(StatusCode, Json<AuthorResponse>)> {
    let name = sanitize(&input.name);
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Author name must contain at least one letter or digit.".into(),
        )));
    }

    if AuthorRepo::find_by(&state.pool, AuthorKey::Name(&name))
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "An author with this name already exists.".into(),
        )));
    }

    let author = AuthorRepo::create(&state.pool, &CreateAuthor { name }).await?;

    Ok((StatusCode::CREATED, Json(author.into())))
}

/// GET /api/v1/author/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<AuthorResponse>> {
    let author = AuthorRepo::find_by(&state.pool, AuthorKey::Id(id))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Author not found.".into())))?;

    Ok(Json(author.into()))
}

/// DELETE /api/v1/author/{id}
///
/// Remove an author. The author's books are removed with it (cascade).
pub async fn delete(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    match AuthorRepo::delete_by_id(&state.pool, id).await {
        DeleteOutcome::Deleted => Ok(Json(MessageResponse {
            message: "Author deleted successfully.".into(),
        })),
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound(
            "Author not found.".into(),
        ))),
        DeleteOutcome::Failed(err) => Err(AppError::Database(err)),
    }
}
