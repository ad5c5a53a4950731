//! JWT access-token issuance and verification.
//!
//! Access tokens are HMAC-signed JWTs carrying the owning account's
//! username as the `sub` claim. Tokens are not persisted; expiry is
//! checked lazily at verification time against the UTC clock.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
///
/// Deserialization requires `sub`, so a token without a subject fails
/// verification outright.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the account's username.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token issuance and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens.
    pub secret_key: String,
    /// Signing algorithm (default: HS256).
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes (default: 30).
    pub access_token_expire_minutes: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_EXPIRE_MINUTES: i64 = 30;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                       | Required | Default |
    /// |-------------------------------|----------|---------|
    /// | `SECRET_KEY`                  | **yes**  | --      |
    /// | `ALGORITHM`                   | no       | `HS256` |
    /// | `ACCESS_TOKEN_EXPIRE_MINUTES` | no       | `30`    |
    ///
    /// # Panics
    ///
    /// Panics if `SECRET_KEY` is not set or is empty, or if `ALGORITHM`
    /// is not a recognized JWA name.
    pub fn from_env() -> Self {
        let secret_key =
            std::env::var("SECRET_KEY").expect("SECRET_KEY must be set in the environment");
        assert!(!secret_key.is_empty(), "SECRET_KEY must not be empty");

        let algorithm: Algorithm = std::env::var("ALGORITHM")
            .unwrap_or_else(|_| "HS256".into())
            .parse()
            .expect("ALGORITHM must be a valid JWA algorithm name");

        let access_token_expire_minutes: i64 = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| DEFAULT_EXPIRE_MINUTES.to_string())
            .parse()
            .expect("ACCESS_TOKEN_EXPIRE_MINUTES must be a valid i64");

        Self {
            secret_key,
            algorithm,
            access_token_expire_minutes,
        }
    }
}

/// Issue a signed access token for the given subject.
///
/// The expiry is the current UTC time plus the configured lifetime.
pub fn issue_access_token(
    subject: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expire_minutes * 60;

    let claims = Claims {
        sub: subject.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret_key.as_bytes()),
    )
}

/// Verify an access token, returning the embedded [`Claims`].
///
/// Fails when the signature does not check out, the payload cannot be
/// decoded (including an absent `sub`), or the token has expired.
pub fn decode_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret_key.as_bytes()),
        &Validation::new(config.algorithm), // validates exp
    )?;
    Ok(token_data.claims)
}
