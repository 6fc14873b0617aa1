//! Application Configuration
//!
//! Process-wide immutable auth configuration: signing secret, token TTL and
//! TOTP issuer are read once at startup and never change afterwards.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for JWT signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Session token TTL (default 10 minutes)
    pub token_ttl: Duration,
    /// Issuer name embedded in otpauth:// provisioning URIs
    pub totp_issuer: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(10 * 60),
            totp_issuer: "SecureStore".to_string(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
