use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shopping cart addressed by its public masked id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub masked_id: String,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub qty: u32,
    pub is_visible: bool,
}

impl Cart {
    /// Items the storefront actually shows; only these are evaluated.
    pub fn visible_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|item| item.is_visible)
    }
}
