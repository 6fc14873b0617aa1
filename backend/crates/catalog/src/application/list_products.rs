//! List Products Use Case

use std::sync::Arc;

use crate::domain::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// List products use case
pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Full unfiltered scan, no pagination
    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_product::{CreateProductInput, CreateProductUseCase};
    use crate::application::testing::MemoryProductRepository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_list_includes_created_product() {
        let repo = Arc::new(MemoryProductRepository::new());

        let created = CreateProductUseCase::new(repo.clone())
            .execute(CreateProductInput {
                name: Some("Widget".to_string()),
                description: None,
                price: Some(dec!(9.99)),
                quantity: Some(5),
            })
            .await
            .unwrap();

        let products = ListProductsUseCase::new(repo).execute().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0], created);
    }

    #[tokio::test]
    async fn test_empty_catalog_lists_nothing() {
        let repo = Arc::new(MemoryProductRepository::new());
        let products = ListProductsUseCase::new(repo).execute().await.unwrap();
        assert!(products.is_empty());
    }
}
