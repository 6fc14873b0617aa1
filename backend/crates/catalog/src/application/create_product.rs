//! Create Product Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Create product input
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

/// Create product use case
pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProductInput) -> CatalogResult<Product> {
        let name = match input.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(CatalogError::MissingFields),
        };
        let price = input.price.ok_or(CatalogError::MissingFields)?;
        let quantity = input.quantity.ok_or(CatalogError::MissingFields)?;

        if price.is_sign_negative() {
            return Err(CatalogError::InvalidField("price must be non-negative"));
        }
        if quantity < 0 {
            return Err(CatalogError::InvalidField("quantity must be non-negative"));
        }

        let product = Product::new(
            name,
            input.description.unwrap_or_default(),
            price,
            quantity,
        );
        self.repo.create(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            name = %product.name,
            "Product created"
        );

        Ok(product)
    }
}
