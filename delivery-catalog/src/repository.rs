use async_trait::async_trait;

use crate::{Cart, CatalogError, Product};

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_sku(&self, sku: &str) -> Result<Product, CatalogError>;
}

/// Repository trait for cart access
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_by_masked_id(&self, masked_id: &str) -> Result<Cart, CatalogError>;
}
