use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use delivery_catalog::{CatalogError, Product, PRIORITY_ATTR, PRIORITY_SHIPPING_ATTR};
use delivery_core::{aggregate, evaluate, load_blackout_window, BlackoutWindow, DeliveryOutcome};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/products/{sku}/priority-delivery", get(check_product))
        .route("/v1/carts/{cart_id}/priority-delivery", get(check_cart))
}

#[derive(Debug, Serialize)]
pub struct PriorityDeliveryResponse {
    #[serde(rename = "priorityEnabled")]
    pub priority_enabled: bool,
    pub toolkit: Option<String>,
}

impl From<DeliveryOutcome> for PriorityDeliveryResponse {
    fn from(outcome: DeliveryOutcome) -> Self {
        // An evaluation failure must not masquerade as a blackout: record it,
        // then fail open.
        if let DeliveryOutcome::Unknown { reason } = &outcome {
            tracing::error!(%reason, "priority delivery check failed, failing open");
        }
        Self {
            priority_enabled: outcome.priority_enabled(),
            toolkit: outcome.toolkit().map(str::to_owned),
        }
    }
}

/// GET /v1/products/{sku}/priority-delivery
/// Check the blackout window against a single product.
pub async fn check_product(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<PriorityDeliveryResponse>, AppError> {
    tracing::info!(%sku, "checking priority delivery for product");

    let product = match state.products.get_by_sku(&sku).await {
        Ok(product) => product,
        Err(CatalogError::ProductNotFound(_)) => {
            return Err(AppError::NotFoundError(format!(
                "Product with SKU {sku} not found"
            )))
        }
        Err(e) => {
            return Ok(Json(
                DeliveryOutcome::fail_open(format!("product lookup failed: {e}")).into(),
            ))
        }
    };

    let window = match load_blackout_window(state.settings.as_ref()).await {
        Ok(window) => window,
        Err(e) => {
            return Ok(Json(
                DeliveryOutcome::fail_open(format!("blackout configuration unavailable: {e}"))
                    .into(),
            ))
        }
    };

    Ok(Json(evaluate_now(&state, &product, PRIORITY_ATTR, &window).into()))
}

/// GET /v1/carts/{cart_id}/priority-delivery
/// Check the blackout window against every visible cart item; one item in
/// blackout disables priority delivery for the whole cart.
pub async fn check_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> Result<Json<PriorityDeliveryResponse>, AppError> {
    tracing::info!(%cart_id, "checking priority delivery for cart");

    let cart = match state.carts.get_by_masked_id(&cart_id).await {
        Ok(cart) => cart,
        Err(CatalogError::CartNotFound(_)) => {
            return Err(AppError::NotFoundError(format!(
                "Cart with ID {cart_id} not found"
            )))
        }
        Err(e) => {
            return Ok(Json(
                DeliveryOutcome::fail_open(format!("cart lookup failed: {e}")).into(),
            ))
        }
    };

    let window = match load_blackout_window(state.settings.as_ref()).await {
        Ok(window) => window,
        Err(e) => {
            return Ok(Json(
                DeliveryOutcome::fail_open(format!("blackout configuration unavailable: {e}"))
                    .into(),
            ))
        }
    };

    let mut outcomes = Vec::new();
    for item in cart.visible_items() {
        tracing::debug!(item = %item.name, sku = %item.sku, "evaluating cart item");
        // A missing or unreadable item product never hard-fails the cart
        // check; it degrades the whole cart to Unknown via aggregation.
        let outcome = match state.products.get_by_sku(&item.sku).await {
            Ok(product) => evaluate_now(&state, &product, PRIORITY_SHIPPING_ATTR, &window),
            Err(e) => {
                DeliveryOutcome::fail_open(format!("cart item {} unavailable: {e}", item.sku))
            }
        };
        outcomes.push(outcome);
    }

    Ok(Json(aggregate(outcomes).into()))
}

fn evaluate_now(
    state: &AppState,
    product: &Product,
    attribute: &str,
    window: &BlackoutWindow,
) -> DeliveryOutcome {
    let now = state.clock.now().with_timezone(&state.timezone);
    evaluate(product.priority_flag(attribute), window, now)
}
