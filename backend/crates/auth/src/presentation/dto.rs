//! API DTOs (Data Transfer Objects)
//!
//! Required request fields are `Option` on purpose: missing-field detection
//! is explicit so the response is a 400, not a deserialization 422.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register response: TOTP enrollment payload
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    /// QR code as base64-encoded PNG
    pub qr_code: String,
    /// Base32 secret for manual entry
    pub secret: String,
    /// otpauth:// URL
    pub otpauth_url: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    /// TOTP code; omitted on the first step of the login flow
    pub totp_code: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
