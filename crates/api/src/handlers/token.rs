//! Handlers for the `/token` resource (issuance and refresh).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use libretto_core::error::CoreError;
use libretto_db::models::account::Account;
use libretto_db::repositories::{AccountKey, AccountRepo};

use crate::auth::jwt::issue_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The single 401 detail for both "no such user" and "wrong password",
/// so the endpoint cannot be used to enumerate usernames.
const BAD_CREDENTIALS_DETAIL: &str = "Incorrect username or password.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /token` and `POST /token/refresh`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/token
///
/// Issue an access token for valid credentials.
pub async fn issue(
    State(state): State<AppState>,
    Json(input): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let account = validate_credentials(&state, &input).await?;

    let access_token = issue_access_token(&account.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

/// POST /api/v1/token/refresh
///
/// Re-validate credentials and issue a fresh token. Tokens are stateless,
/// so a refresh is simply a new issuance.
pub async fn refresh(
    state: State<AppState>,
    input: Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    issue(state, input).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up the account and verify the password, failing with one generic
/// message for either miss.
async fn validate_credentials(state: &AppState, input: &TokenRequest) -> AppResult<Account> {
    let account = AccountRepo::find_by(&state.pool, AccountKey::Username(&input.username))
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS_DETAIL.into()))
        })?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            BAD_CREDENTIALS_DETAIL.into(),
        )));
    }

    Ok(account)
}
