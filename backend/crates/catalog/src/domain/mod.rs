//! Domain Layer

pub mod product;
pub mod repository;

pub use product::{Product, ProductChanges};
pub use repository::ProductRepository;
