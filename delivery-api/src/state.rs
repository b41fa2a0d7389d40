use std::sync::Arc;

use chrono_tz::Tz;
use delivery_catalog::{CartRepository, ProductRepository};
use delivery_core::{Clock, ConfigProvider};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub settings: Arc<dyn ConfigProvider>,
    pub clock: Arc<dyn Clock>,
    /// Reference zone the blackout window is anchored to.
    pub timezone: Tz,
}
