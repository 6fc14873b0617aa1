//! Update Product Use Case
//!
//! Applies only the fields present in the request. Empty strings and zero
//! numerics are treated as "not provided" (preserved input-handling gap).

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::product::{Product, ProductChanges};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Update product input
pub type UpdateProductInput = ProductChanges;

/// Update product use case
pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        product_id: Uuid,
        changes: UpdateProductInput,
    ) -> CatalogResult<Product> {
        if changes.price.is_some_and(|p| p.is_sign_negative()) {
            return Err(CatalogError::InvalidField("price must be non-negative"));
        }
        if changes.quantity.is_some_and(|q| q < 0) {
            return Err(CatalogError::InvalidField("quantity must be non-negative"));
        }

        let mut product = self
            .repo
            .find_by_id(product_id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        product.apply(&changes);
        self.repo.update(&product).await?;

        tracing::info!(product_id = %product.product_id, "Product updated");

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_product::{CreateProductInput, CreateProductUseCase};
    use crate::application::testing::MemoryProductRepository;
    use rust_decimal_macros::dec;

    async fn seed(repo: &Arc<MemoryProductRepository>) -> Product {
        CreateProductUseCase::new(repo.clone())
            .execute(CreateProductInput {
                name: Some("Widget".to_string()),
                description: Some("A widget".to_string()),
                price: Some(dec!(9.99)),
                quantity: Some(5),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_partial_update_persists() {
        let repo = Arc::new(MemoryProductRepository::new());
        let product = seed(&repo).await;

        let updated = UpdateProductUseCase::new(repo.clone())
            .execute(
                product.product_id,
                UpdateProductInput {
                    price: Some(dec!(12.50)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, dec!(12.50));
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description, "A widget");
        assert_eq!(updated.quantity, 5);

        let stored = repo.find_by_id(product.product_id).await.unwrap().unwrap();
        assert_eq!(stored.price, dec!(12.50));
    }

    #[tokio::test]
    async fn test_update_missing_product_not_found() {
        let repo = Arc::new(MemoryProductRepository::new());

        let err = UpdateProductUseCase::new(repo)
            .execute(
                Uuid::new_v4(),
                UpdateProductInput {
                    price: Some(dec!(12.50)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let repo = Arc::new(MemoryProductRepository::new());
        let product = seed(&repo).await;

        let err = UpdateProductUseCase::new(repo)
            .execute(
                product.product_id,
                UpdateProductInput {
                    price: Some(dec!(-5.00)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::InvalidField(_)));
    }

    #[tokio::test]
    async fn test_zero_quantity_not_applied() {
        let repo = Arc::new(MemoryProductRepository::new());
        let product = seed(&repo).await;

        let updated = UpdateProductUseCase::new(repo)
            .execute(
                product.product_id,
                UpdateProductInput {
                    quantity: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // Preserved gap: zero is indistinguishable from "not provided"
        assert_eq!(updated.quantity, 5);
    }
}
