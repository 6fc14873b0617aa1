//! Request/Response DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::Product;

/// Create product request.
///
/// Fields are optional so that missing ones produce a 400 instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

/// Update product request; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

/// A single product as returned by the API
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

/// Create/update product response
#[derive(Debug, Serialize)]
pub struct ProductMessageResponse {
    pub message: String,
    pub product: ProductResponse,
}

/// List products response
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

/// Delete product response
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
}
