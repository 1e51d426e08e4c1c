use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;

/// Token payload. `sub` carries the user id as a string; whether it is a
/// syntactically valid id is checked separately by `subject_id` so a malformed
/// subject is rejected as an invalid token, not a panic.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: user_id.to_string(),
            exp,
            iat: now.timestamp(),
        }
    }
}

/// Secret-free authenticated user context, constructed fresh per request and
/// discarded at the end of it. Inserted into request extensions by the auth
/// middleware.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Authentication failure taxonomy. Every variant surfaces as HTTP 401 with
/// its legacy wire message; the variants exist so logging and tests can tell
/// the failure modes apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authorized, token missing")]
    MissingToken,

    #[error("Not authorized, token invalid")]
    InvalidToken,

    #[error("Not authorized, user not found")]
    UserNotFound,

    #[error("Not authorized, token verification failed")]
    VerificationFailed,

    #[error("User context not found on request")]
    MissingIdentity,
}

/// Verify signature and expiry in a single atomic call. No partial trust: any
/// decode failure (bad signature, expired, malformed) collapses to
/// `InvalidToken`.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    if security.jwt_secret.is_empty() {
        tracing::error!("JWT secret not configured");
        return Err(AuthError::VerificationFailed);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let validation = Validation::default();

    let token_data =
        decode::<Claims>(token, &decoding_key, &validation).map_err(|_| AuthError::InvalidToken)?;

    Ok(token_data.claims)
}

/// The verified payload must carry a subject in the store's native
/// primary-key format (UUID).
pub fn subject_id(claims: &Claims) -> Result<Uuid, AuthError> {
    if claims.sub.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)
}

/// Mint a token for a user id. Used by login tooling and tests.
pub fn generate_token(user_id: Uuid, security: &SecurityConfig) -> Result<String, AuthError> {
    if security.jwt_secret.is_empty() {
        return Err(AuthError::VerificationFailed);
    }

    let claims = Claims::new(user_id, security.jwt_expiry_hours);
    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key).map_err(|_| AuthError::VerificationFailed)
}
