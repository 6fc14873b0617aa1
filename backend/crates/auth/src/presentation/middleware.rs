//! Auth Middleware
//!
//! Bearer-token validation for protected routes. Runs in front of every
//! catalog handler; any failure short-circuits with 401 before the wrapped
//! handler executes. On success the resolved identity is inserted into the
//! request extensions for downstream handlers.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::token;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Resolved identity stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Middleware that requires a valid bearer token
///
/// Verifies the JWT signature and expiry, then resolves the subject to a
/// live user row; a token for a deleted user is rejected.
pub async fn require_bearer_token<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers()).ok_or(AuthError::MissingToken)?;

    let user_id = token::verify(&state.config.token_secret, token)?;

    let user = state
        .repo
        .find_by_id(user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        username: user.username.as_str().to_string(),
    });

    Ok(next.run(req).await)
}

/// Pull the token out of `Authorization: Bearer <token>`
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
