//! Platform - Cross-domain technical capabilities
//!
//! Cryptographic primitives shared by the domain crates. Currently this is
//! password handling; anything with no domain vocabulary of its own lives
//! here.

pub mod password;
