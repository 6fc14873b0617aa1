//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Reject `None` and empty strings the same way
fn required(field: Option<String>) -> AuthResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuthError::MissingFields),
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let username = required(req.username)?;
    let password = required(req.password)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(RegisterInput { username, password }).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            qr_code: output.qr_code_base64,
            secret: output.secret,
            otpauth_url: output.otpauth_url,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let username = required(req.username)?;
    let password = required(req.password)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(LoginInput {
            username,
            password,
            totp_code: req.totp_code,
        })
        .await?;

    // Password accepted but no TOTP code: 200 with a prompt, no token
    let response = if output.requires_2fa {
        LoginResponse {
            message: "2FA code required".to_string(),
            token: None,
        }
    } else {
        LoginResponse {
            message: "Login successful".to_string(),
            token: output.token,
        }
    };

    Ok((StatusCode::OK, Json(response)))
}
