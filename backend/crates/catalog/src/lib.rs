//! Catalog Backend Module
//!
//! CRUD over the product catalog, gated behind the auth crate's bearer
//! middleware (composed in the api binary).
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgProductRepository;
pub use presentation::router::catalog_router;

pub mod models {
    pub use crate::domain::product::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProductRepository as ProductStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
