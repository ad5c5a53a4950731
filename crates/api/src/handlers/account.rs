//! Handlers for the `/account` resource.
//!
//! Creation and reads are public; updates and deletes require the bearer
//! token of the account being modified.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use libretto_core::error::CoreError;
use libretto_core::types::DbId;
use libretto_db::models::account::{AccountResponse, CreateAccount, UpdateAccount};
use libretto_db::repositories::{AccountKey, AccountRepo, DeleteOutcome};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentAccount;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /account`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    pub username: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub password: String,
}

/// Request body for `PUT /account/{id}`.
///
/// Updates are whole-record overwrites: every field is required, and the
/// password is re-hashed even when it did not change.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    pub username: String,
    #[validate(email(message = "value is not a valid email address"))]
    pub email: String,
    pub password: String,
}

/// Confirmation body returned by `DELETE /account/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/account
///
/// Create a new account. Username uniqueness is checked before email, so
/// when both collide the username conflict message wins.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAccountRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if AccountRepo::find_by(&state.pool, AccountKey::Username(&input.username))
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists.".into(),
        )));
    }

    if AccountRepo::find_by(&state.pool, AccountKey::Email(&input.email))
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already exists.".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateAccount {
        username: input.username,
        email: input.email,
        password_hash,
    };

    let account = AccountRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// GET /api/v1/account/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AccountResponse>> {
    let account = AccountRepo::find_by(&state.pool, AccountKey::Id(id))
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Account not found.".into())))?;

    Ok(Json(account.into()))
}

/// PUT /api/v1/account/{id}
///
/// Overwrite an account. Only the account owner may modify it.
pub async fn update(
    State(state): State<AppState>,
    CurrentAccount(actor): CurrentAccount,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAccountRequest>,
) -> AppResult<Json<AccountResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if AccountRepo::find_by(&state.pool, AccountKey::Id(id))
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound(
            "Account not found.".into(),
        )));
    }

    if actor.id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only modify your own account.".into(),
        )));
    }

    // Every update carries a password and re-hashes it, changed or not.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let update_dto = UpdateAccount {
        username: input.username,
        email: input.email,
        password_hash,
    };

    let account = AccountRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Account not found.".into())))?;

    Ok(Json(account.into()))
}

/// DELETE /api/v1/account/{id}
///
/// Remove an account. Only the account owner may delete it.
pub async fn delete(
    State(state): State<AppState>,
    CurrentAccount(actor): CurrentAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if AccountRepo::find_by(&state.pool, AccountKey::Id(id))
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound(
            "Account not found.".into(),
        )));
    }

    if actor.id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only delete your own account.".into(),
        )));
    }

    match AccountRepo::delete_by_id(&state.pool, id).await {
        DeleteOutcome::Deleted => Ok(Json(MessageResponse {
            message: "Account deleted successfully.".into(),
        })),
        // The existence check above can race with a concurrent delete.
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound(
            "Account not found.".into(),
        ))),
        DeleteOutcome::Failed(err) => Err(AppError::Database(err)),
    }
}
