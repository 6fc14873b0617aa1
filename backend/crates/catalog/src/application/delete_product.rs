//! Delete Product Use Case

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Delete product use case
pub struct DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, product_id: Uuid) -> CatalogResult<()> {
        let deleted = self.repo.delete(product_id).await?;
        if !deleted {
            return Err(CatalogError::NotFound);
        }

        tracing::info!(product_id = %product_id, "Product deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_product::{CreateProductInput, CreateProductUseCase};
    use crate::application::testing::MemoryProductRepository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_delete_removes_product() {
        let repo = Arc::new(MemoryProductRepository::new());
        let product = CreateProductUseCase::new(repo.clone())
            .execute(CreateProductInput {
                name: Some("Widget".to_string()),
                description: None,
                price: Some(dec!(9.99)),
                quantity: Some(5),
            })
            .await
            .unwrap();

        DeleteProductUseCase::new(repo.clone())
            .execute(product.product_id)
            .await
            .unwrap();

        assert!(repo.find_by_id(product.product_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_product_not_found() {
        let repo = Arc::new(MemoryProductRepository::new());

        let err = DeleteProductUseCase::new(repo)
            .execute(Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::NotFound));
    }
}
