pub mod cart;
pub mod product;
pub mod repository;

pub use cart::{Cart, CartItem};
pub use product::{Product, PRIORITY_ATTR, PRIORITY_SHIPPING_ATTR};
pub use repository::{CartRepository, ProductRepository};

/// Errors surfaced by the repository traits. `ProductNotFound`/`CartNotFound`
/// are user-facing lookups misses; `Storage` is a backend failure the caller
/// may choose to fail open on.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Cart not found: {0}")]
    CartNotFound(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}
