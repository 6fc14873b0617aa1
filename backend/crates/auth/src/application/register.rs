//! Register Use Case
//!
//! Creates a new user account: hashes the password, provisions a fresh TOTP
//! secret, persists the user, and renders the enrollment QR code.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    totp_secret::TotpSecret,
    user_password::{RawPassword, UserPassword},
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output: the enrollment payload returned to the client
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: uuid::Uuid,
    /// Base32 secret for manual entry
    pub secret: String,
    /// QR code as base64-encoded PNG
    pub qr_code_base64: String,
    /// otpauth:// provisioning URI
    pub otpauth_url: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate username
        let username =
            Username::new(input.username).map_err(|e| AuthError::InvalidUsername(e.to_string()))?;

        // Uniqueness is enforced at write time; this check gives the clean
        // error path, the unique index catches races
        if self.repo.exists_by_username(username.as_str()).await? {
            return Err(AuthError::DuplicateUsername);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Provision the TOTP secret (once, never rotated)
        let totp_secret = TotpSecret::generate();

        let user = User::new(username, password_hash, totp_secret);
        self.repo.create(&user).await?;

        let issuer = self.config.totp_issuer.as_str();
        let account = user.username.as_str();

        let qr_code_base64 = user
            .totp_secret
            .qr_png_base64(issuer, account)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let otpauth_url = user
            .totp_secret
            .provisioning_uri(issuer, account)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
            secret: user.totp_secret.as_base32().to_string(),
            qr_code_base64,
            otpauth_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryUserRepository;

    fn use_case(repo: Arc<MemoryUserRepository>) -> RegisterUseCase<MemoryUserRepository> {
        RegisterUseCase::new(repo, Arc::new(AuthConfig::development()))
    }

    #[tokio::test]
    async fn test_register_persists_user() {
        let repo = Arc::new(MemoryUserRepository::new());
        let output = use_case(repo.clone())
            .execute(RegisterInput {
                username: "alice".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();

        assert!(!output.secret.is_empty());
        assert!(!output.qr_code_base64.is_empty());
        assert!(output.otpauth_url.starts_with("otpauth://totp/"));

        let stored = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.user_id, output.user_id);
        assert_eq!(stored.totp_secret.as_base32(), output.secret);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = Arc::new(MemoryUserRepository::new());
        let uc = use_case(repo);

        let input = || RegisterInput {
            username: "alice".to_string(),
            password: "hunter2hunter2".to_string(),
        };

        uc.execute(input()).await.unwrap();
        let err = uc.execute(input()).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
    }

    #[tokio::test]
    async fn test_weak_password_rejected() {
        let repo = Arc::new(MemoryUserRepository::new());
        let err = use_case(repo)
            .execute(RegisterInput {
                username: "alice".to_string(),
                password: "short".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }

    #[tokio::test]
    async fn test_invalid_username_rejected() {
        let repo = Arc::new(MemoryUserRepository::new());
        let err = use_case(repo)
            .execute(RegisterInput {
                username: "   ".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidUsername(_)));
    }
}
