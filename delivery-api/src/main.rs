use std::net::SocketAddr;
use std::sync::Arc;

use delivery_api::{app, AppState};
use delivery_core::SystemClock;
use delivery_store::{InMemoryCartRepo, InMemoryProductRepo, StaticSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delivery_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = delivery_store::app_config::Config::load().expect("Failed to load config");
    let timezone: chrono_tz::Tz = config
        .delivery
        .timezone
        .parse()
        .expect("Invalid reference timezone");
    tracing::info!("Starting Delivery API on port {}", config.server.port);

    let settings = Arc::new(StaticSettings::from_blackout(&config.delivery.blackout));
    let products = Arc::new(InMemoryProductRepo::new());
    let carts = Arc::new(InMemoryCartRepo::new());

    let app_state = AppState {
        products,
        carts,
        settings,
        clock: Arc::new(SystemClock),
        timezone,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
