use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{self, AuthError, Identity};
use crate::config;
use crate::database::{user_repository, DatabaseManager};
use crate::error::ApiError;

/// Bearer-token authentication middleware.
///
/// Runs the authenticator steps strictly in order: extract the credential,
/// verify it atomically, check the subject format, resolve the user. A token
/// that fails verification never triggers a user lookup, and a store outage
/// surfaces as a generic verification failure without internal detail.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let security = &config::config().security;

    let token = extract_bearer_token(&headers)?;
    let claims = auth::verify_token(token, security)?;
    let user_id = auth::subject_id(&claims)?;

    let pool = DatabaseManager::pool().await.map_err(|e| {
        tracing::error!(error = %e, "user store unavailable during authentication");
        AuthError::VerificationFailed
    })?;

    let user = user_repository::find_by_id(&pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "user lookup failed during authentication");
            AuthError::VerificationFailed
        })?
        .ok_or(AuthError::UserNotFound)?;

    let identity = Identity {
        id: user.id,
        email: user.email,
        name: user.name,
    };
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Extract the bearer credential from the Authorization header.
///
/// The header must be present and carry the literal "Bearer " scheme; an
/// empty remainder counts as a missing token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get("authorization")
        .ok_or(AuthError::MissingToken)?;

    let auth_str = auth_header.to_str().map_err(|_| AuthError::MissingToken)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    if token.trim().is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
