//! Repository Traits

use crate::domain::product::Product;
use crate::error::CatalogResult;
use uuid::Uuid;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    async fn create(&self, product: &Product) -> CatalogResult<()>;

    /// Find product by ID
    async fn find_by_id(&self, product_id: Uuid) -> CatalogResult<Option<Product>>;

    /// Full unfiltered scan, no pagination
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Update an existing product
    async fn update(&self, product: &Product) -> CatalogResult<()>;

    /// Delete a product; returns false when the id was absent
    async fn delete(&self, product_id: Uuid) -> CatalogResult<bool>;
}
