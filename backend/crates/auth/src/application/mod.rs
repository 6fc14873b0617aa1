//! Application Layer
//!
//! Use cases orchestrating the domain.

pub mod config;
pub mod login;
pub mod register;

pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};

#[cfg(test)]
pub(crate) mod testing;
