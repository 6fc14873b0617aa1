//! TOTP Secret Value Object
//!
//! Wraps the per-user TOTP secret for two-factor authentication.
//! Google Authenticator compatible settings: SHA1, 6 digits, 30-second step.
//! Skew of 1 accepts the immediately adjacent windows for clock tolerance.
//!
//! Codes are not tracked for replay: within its window (and the adjacent
//! ones) a code verifies as many times as it is submitted.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use totp_rs::{Algorithm, Secret, TOTP};

/// TOTP configuration constants
const TOTP_DIGITS: usize = 6;
const TOTP_STEP: u64 = 30;
const TOTP_SKEW: u8 = 1;

/// TOTP secret for two-factor authentication
///
/// Generated once at registration with 160 bits of entropy and never rotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpSecret {
    /// Base32-encoded secret
    secret_base32: String,
}

impl TotpSecret {
    /// Generate a new random TOTP secret (160 bits)
    pub fn generate() -> Self {
        let secret = Secret::generate_secret();
        Self {
            secret_base32: secret.to_encoded().to_string(),
        }
    }

    /// Create from a base32-encoded string (from database)
    pub fn from_base32(secret: impl Into<String>) -> AppResult<Self> {
        let secret_str = secret.into();
        // Validate by trying to decode
        Secret::Encoded(secret_str.clone())
            .to_bytes()
            .map_err(|e| AppError::internal(format!("Invalid TOTP secret: {:?}", e)))?;

        Ok(Self {
            secret_base32: secret_str,
        })
    }

    /// Get the base32-encoded secret for storage and manual entry
    pub fn as_base32(&self) -> &str {
        &self.secret_base32
    }

    /// Create a TOTP instance for this secret
    fn to_totp(&self, issuer: &str, account_name: &str) -> AppResult<TOTP> {
        let secret = Secret::Encoded(self.secret_base32.clone());

        TOTP::new(
            Algorithm::SHA1,
            TOTP_DIGITS,
            TOTP_SKEW,
            TOTP_STEP,
            secret
                .to_bytes()
                .map_err(|e| AppError::internal(format!("Invalid TOTP secret: {:?}", e)))?,
            Some(issuer.to_string()),
            account_name.to_string(),
        )
        .map_err(|e| AppError::internal(format!("Failed to create TOTP: {}", e)))
    }

    /// Verify a code against the current window (and adjacent windows)
    pub fn verify(&self, code: &str, issuer: &str, account_name: &str) -> AppResult<bool> {
        let totp = self.to_totp(issuer, account_name)?;
        Ok(totp.check_current(code).unwrap_or(false))
    }

    /// Verify a code at an explicit Unix timestamp
    pub fn verify_at(
        &self,
        code: &str,
        issuer: &str,
        account_name: &str,
        at: u64,
    ) -> AppResult<bool> {
        let totp = self.to_totp(issuer, account_name)?;
        Ok(totp.check(code, at))
    }

    /// Generate the code for the current window (for testing)
    #[cfg(test)]
    pub fn generate_current(&self, issuer: &str, account_name: &str) -> AppResult<String> {
        let totp = self.to_totp(issuer, account_name)?;
        totp.generate_current()
            .map_err(|e| AppError::internal(format!("Failed to generate TOTP: {}", e)))
    }

    /// Generate the code for an explicit Unix timestamp (for testing)
    #[cfg(test)]
    pub fn generate_at(&self, issuer: &str, account_name: &str, at: u64) -> AppResult<String> {
        let totp = self.to_totp(issuer, account_name)?;
        Ok(totp.generate(at))
    }

    /// The otpauth:// provisioning URI for authenticator apps
    pub fn provisioning_uri(&self, issuer: &str, account_name: &str) -> AppResult<String> {
        let totp = self.to_totp(issuer, account_name)?;
        Ok(totp.get_url())
    }

    /// Render the provisioning URI as a QR code, base64-encoded PNG
    pub fn qr_png_base64(&self, issuer: &str, account_name: &str) -> AppResult<String> {
        let totp = self.to_totp(issuer, account_name)?;
        totp.get_qr_base64()
            .map_err(|e| AppError::internal(format!("Failed to generate QR code: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "SecureStore";
    const ACCOUNT: &str = "alice";

    #[test]
    fn test_generate_is_random_base32() {
        let a = TotpSecret::generate();
        let b = TotpSecret::generate();
        assert!(!a.as_base32().is_empty());
        assert_ne!(a.as_base32(), b.as_base32());
        // 160 bits -> 32 base32 characters
        assert_eq!(a.as_base32().len(), 32);
    }

    #[test]
    fn test_verify_current_code() {
        let secret = TotpSecret::generate();

        let code = secret.generate_current(ISSUER, ACCOUNT).unwrap();
        assert!(secret.verify(&code, ISSUER, ACCOUNT).unwrap());

        // Wrong code should fail
        assert!(!secret.verify("000000", ISSUER, ACCOUNT).unwrap());
    }

    #[test]
    fn test_window_tolerance() {
        let secret = TotpSecret::generate();
        let now = 1_700_000_000u64;

        let code = secret.generate_at(ISSUER, ACCOUNT, now).unwrap();

        // Same window and the adjacent windows are accepted (skew 1)
        assert!(secret.verify_at(&code, ISSUER, ACCOUNT, now).unwrap());
        assert!(secret.verify_at(&code, ISSUER, ACCOUNT, now + 30).unwrap());
        assert!(secret.verify_at(&code, ISSUER, ACCOUNT, now - 30).unwrap());

        // Two windows away is rejected
        assert!(!secret.verify_at(&code, ISSUER, ACCOUNT, now + 90).unwrap());
    }

    #[test]
    fn test_code_replays_within_window() {
        // Documented gap: nothing marks a code as used
        let secret = TotpSecret::generate();
        let now = 1_700_000_000u64;

        let code = secret.generate_at(ISSUER, ACCOUNT, now).unwrap();
        assert!(secret.verify_at(&code, ISSUER, ACCOUNT, now).unwrap());
        assert!(secret.verify_at(&code, ISSUER, ACCOUNT, now).unwrap());
    }

    #[test]
    fn test_from_base32_round_trip() {
        let secret = TotpSecret::generate();
        let base32 = secret.as_base32().to_string();

        let restored = TotpSecret::from_base32(base32).unwrap();
        assert_eq!(secret.as_base32(), restored.as_base32());
    }

    #[test]
    fn test_provisioning_uri_format() {
        let secret = TotpSecret::generate();
        let uri = secret.provisioning_uri(ISSUER, ACCOUNT).unwrap();

        assert!(uri.starts_with("otpauth://totp/"));
        assert!(uri.contains("SecureStore"));
        assert!(uri.contains(secret.as_base32()));
    }

    #[test]
    fn test_qr_code_renders() {
        let secret = TotpSecret::generate();
        let qr = secret.qr_png_base64(ISSUER, ACCOUNT).unwrap();
        assert!(!qr.is_empty());
    }
}
