use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Attribute key carrying the priority flag on a direct product check.
pub const PRIORITY_ATTR: &str = "priority";

/// Attribute key carrying the priority flag on a cart-item check. The two
/// checks read different attributes but feed the same evaluator.
pub const PRIORITY_SHIPPING_ATTR: &str = "priority_shipping";

/// Catalog product, reduced to what the delivery checks need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub attributes: Value,
}

impl Product {
    /// Read an integer priority flag from the attribute bag.
    ///
    /// Attribute values arrive either as numbers or as stringly-typed admin
    /// input. A missing or unparseable value reads as 0, i.e. subject to the
    /// blackout rule; legacy records predate the flag entirely.
    pub fn priority_flag(&self, attribute: &str) -> i64 {
        match &self.attributes[attribute] {
            Value::Number(n) => n.as_i64().unwrap_or(0),
            Value::String(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }
}
