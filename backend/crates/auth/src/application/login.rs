//! Login Use Case
//!
//! Authenticates a user by password, then by TOTP code, then issues a JWT.
//! A correct password without a TOTP code is not an error: the caller gets a
//! "2FA required" output and no token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_password::RawPassword, username::Username};
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
    /// TOTP code; absent on the first step of the login flow
    pub totp_code: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token; `None` when 2FA is still required
    pub token: Option<String>,
    /// Whether the caller must resubmit with a TOTP code
    pub requires_2fa: bool,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Normalize the same way registration does, so the stored form matches
        let username =
            Username::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_username(username.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A password that fails policy can never match a stored hash
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // Password is good; now the TOTP step. An empty code counts as absent.
        let totp_code = input.totp_code.filter(|c| !c.trim().is_empty());

        let Some(code) = totp_code else {
            return Ok(LoginOutput {
                token: None,
                requires_2fa: true,
            });
        };

        let valid = user
            .totp_secret
            .verify(
                code.trim(),
                self.config.totp_issuer.as_str(),
                user.username.as_str(),
            )
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !valid {
            return Err(AuthError::InvalidTwoFactorCode);
        }

        let token = token::issue(&self.config.token_secret, self.config.token_ttl, user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput {
            token: Some(token),
            requires_2fa: false,
        })
    }
}
