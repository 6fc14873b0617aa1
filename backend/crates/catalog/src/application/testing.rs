//! In-memory test doubles

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// In-memory product repository for use case tests
pub(crate) struct MemoryProductRepository {
    products: Mutex<HashMap<Uuid, Product>>,
}

impl MemoryProductRepository {
    pub(crate) fn new() -> Self {
        Self {
            products: Mutex::new(HashMap::new()),
        }
    }
}

impl ProductRepository for MemoryProductRepository {
    async fn create(&self, product: &Product) -> CatalogResult<()> {
        self.products
            .lock()
            .unwrap()
            .insert(product.product_id, product.clone());
        Ok(())
    }

    async fn find_by_id(&self, product_id: Uuid) -> CatalogResult<Option<Product>> {
        Ok(self.products.lock().unwrap().get(&product_id).cloned())
    }

    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let mut products: Vec<Product> =
            self.products.lock().unwrap().values().cloned().collect();
        products.sort_by_key(|p| p.created_at);
        Ok(products)
    }

    async fn update(&self, product: &Product) -> CatalogResult<()> {
        self.products
            .lock()
            .unwrap()
            .insert(product.product_id, product.clone());
        Ok(())
    }

    async fn delete(&self, product_id: Uuid) -> CatalogResult<bool> {
        Ok(self.products.lock().unwrap().remove(&product_id).is_some())
    }
}
