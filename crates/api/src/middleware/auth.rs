//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use libretto_core::error::CoreError;
use libretto_db::models::account::Account;
use libretto_db::repositories::{AccountKey, AccountRepo};

use crate::auth::jwt::decode_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// The single 401 detail used for every credential failure, so a caller
/// cannot tell a bad token from a deleted account.
const CREDENTIALS_DETAIL: &str = "Could not validate credentials.";

/// Authenticated account resolved from a JWT Bearer token in the
/// `Authorization` header.
///
/// Verifies the token, then loads the account whose username matches the
/// `sub` claim. Use this as an extractor parameter in any handler that
/// requires authentication:
///
/// ```ignore
/// async fn my_handler(CurrentAccount(account): CurrentAccount) -> AppResult<Json<()>> {
///     tracing::info!(account_id = account.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(unauthorized)?;

        let claims =
            decode_access_token(token, &state.config.jwt).map_err(|_| unauthorized())?;

        let account = AccountRepo::find_by(&state.pool, AccountKey::Username(&claims.sub))
            .await?
            .ok_or_else(unauthorized)?;

        Ok(CurrentAccount(account))
    }
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(CREDENTIALS_DETAIL.into()))
}
