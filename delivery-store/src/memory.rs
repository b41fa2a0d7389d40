use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use delivery_catalog::{Cart, CartRepository, CatalogError, Product, ProductRepository};

/// In-memory product store keyed by SKU.
#[derive(Default)]
pub struct InMemoryProductRepo {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, product: Product) {
        self.products
            .write()
            .await
            .insert(product.sku.clone(), product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn get_by_sku(&self, sku: &str) -> Result<Product, CatalogError> {
        self.products
            .read()
            .await
            .get(sku)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(sku.to_string()))
    }
}

/// In-memory cart store keyed by the public masked id.
#[derive(Default)]
pub struct InMemoryCartRepo {
    carts: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCartRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, cart: Cart) {
        self.carts
            .write()
            .await
            .insert(cart.masked_id.clone(), cart);
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepo {
    async fn get_by_masked_id(&self, masked_id: &str) -> Result<Cart, CatalogError> {
        self.carts
            .read()
            .await
            .get(masked_id)
            .cloned()
            .ok_or_else(|| CatalogError::CartNotFound(masked_id.to_string()))
    }
}
