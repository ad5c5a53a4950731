//! Handlers for the `/novelist` resource. All operations require auth.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use libretto_core::error::CoreError;
use libretto_core::sanitize::sanitize;
use libretto_core::types::DbId;
use libretto_db::models::novelist::{CreateNovelist, NovelistResponse};
use libretto_db::repositories::{NovelistKey, NovelistRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentAccount;
use crate::state::AppState;

/// Request body for `POST /novelist`.
#[derive(Debug, Deserialize)]
pub struct CreateNovelistRequest {
    pub name: String,
}

/// POST /api/v1/novelist
///
/// Create a new novelist. The name is sanitized before the uniqueness
/// check.
pub async fn create(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Json(input): Json<CreateNovelistRequest>,
) -> AppResult<(StatusCode, Json<NovelistResponse>)> {
    let name = sanitize(&input.name);
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Novelist name must contain at least one letter or digit.".into(),
        )));
    }

    if NovelistRepo::find_by(&state.pool, NovelistKey::Name(&name))
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A novelist with this name already exists.".into(),
        )));
    }

    let novelist = NovelistRepo::create(&state.pool, &CreateNovelist { name }).await?;

    Ok((StatusCode::CREATED, Json(novelist.into())))
}

/// GET /api/v1/novelist/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentAccount(_actor): CurrentAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<NovelistResponse>> {
    let novelist = NovelistRepo::find_by(&state.pool, NovelistKey::Id(id))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Novelist not found.".into())))?;

    Ok(Json(novelist.into()))
}
