//! Username Value Object
//!
//! The public login identifier. Lookups and the uniqueness constraint use the
//! stored form verbatim; input is NFKC-normalized and trimmed before
//! validation so visually identical names collide instead of coexisting.
//!
//! ## Invariants
//! - 1 to 50 characters after normalization (matches the column width)
//! - No control characters, no interior whitespace

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 50;

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid characters")]
    InvalidCharacter,
}

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Create a username from raw input, normalizing and validating it
    pub fn new(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let normalized: String = raw.into().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: USERNAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        for ch in trimmed.chars() {
            // ':' is reserved by the otpauth label format
            if ch.is_control() || ch.is_whitespace() || ch == ':' {
                return Err(UsernameError::InvalidCharacter);
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The stored form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let name = Username::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = Username::new("  alice  ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Username::new("").unwrap_err(), UsernameError::Empty);
        assert_eq!(Username::new("   ").unwrap_err(), UsernameError::Empty);
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "x".repeat(USERNAME_MAX_LENGTH + 1);
        assert!(matches!(
            Username::new(long).unwrap_err(),
            UsernameError::TooLong { .. }
        ));
    }

    #[test]
    fn test_rejects_interior_whitespace() {
        assert_eq!(
            Username::new("ali ce").unwrap_err(),
            UsernameError::InvalidCharacter
        );
    }

    #[test]
    fn test_nfkc_normalization_collides() {
        // Full-width and ASCII forms normalize to the same stored value
        let wide = Username::new("ａｌｉｃｅ").unwrap();
        let ascii = Username::new("alice").unwrap();
        assert_eq!(wide, ascii);
    }
}
