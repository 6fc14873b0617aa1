//! Session Tokens
//!
//! Stateless JWT sessions: `sub` carries the user id, `exp` the absolute
//! expiry (issue time + fixed TTL). Signed HS256 with the process-wide
//! secret from [`AuthConfig`](crate::application::config::AuthConfig).
//! There is no refresh mechanism and no revocation list; a new login is
//! required after expiry.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp)
    pub exp: i64,
}

/// Issue a token for `user_id` expiring `ttl` from now
pub fn issue(secret: &[u8], ttl: Duration, user_id: Uuid) -> AuthResult<String> {
    issue_at(secret, ttl, user_id, Utc::now())
}

/// Issue a token for `user_id` expiring `ttl` after `now`
pub fn issue_at(
    secret: &[u8],
    ttl: Duration,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AuthResult<String> {
    let ttl = ChronoDuration::from_std(ttl)
        .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
}

/// Verify a token and return the user id it was issued for
///
/// Any failure - bad signature, malformed token, expired - collapses to
/// [`AuthError::InvalidToken`]; callers get no oracle for which check failed.
pub fn verify(secret: &[u8], token: &str) -> AuthResult<Uuid> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is exact: no clock-skew allowance on the server side
    validation.leeway = 0;

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|_| AuthError::InvalidToken)?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
}
