//! Catalog Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router for any repository implementation.
///
/// Authentication is not applied here; the api binary wraps these routes
/// in the bearer-token middleware.
pub fn catalog_router<R>(repo: Arc<R>) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState { repo };

    Router::new()
        .route(
            "/products",
            get(handlers::list_products::<R>).post(handlers::create_product::<R>),
        )
        .route(
            "/products/{id}",
            put(handlers::update_product::<R>).delete(handlers::delete_product::<R>),
        )
        .with_state(state)
}
