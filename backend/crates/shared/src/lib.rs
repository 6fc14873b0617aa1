//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every domain crate:
//! - Common error types and result aliases
//! - The single error-kind to HTTP-status lookup table
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
