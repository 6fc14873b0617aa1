//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, ListProductsUseCase,
    UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{
    CreateProductRequest, DeleteProductResponse, ProductListResponse, ProductMessageResponse,
    ProductResponse, UpdateProductRequest,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CreateProductRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());
    let product = use_case
        .execute(CreateProductInput {
            name: req.name,
            description: req.description,
            price: req.price,
            quantity: req.quantity,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductMessageResponse {
            message: "Product created successfully".to_string(),
            product: ProductResponse::from(product),
        }),
    ))
}

// ============================================================================
// List
// ============================================================================

/// GET /products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProductUseCase::new(state.repo.clone());
    let product = use_case
        .execute(
            product_id,
            UpdateProductInput {
                name: req.name,
                description: req.description,
                price: req.price,
                quantity: req.quantity,
            },
        )
        .await?;

    Ok(Json(ProductMessageResponse {
        message: "Product updated successfully".to_string(),
        product: ProductResponse::from(product),
    }))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<Uuid>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    DeleteProductUseCase::new(state.repo.clone())
        .execute(product_id)
        .await?;

    Ok(Json(DeleteProductResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
