pub mod app_config;
pub mod memory;
pub mod settings;

pub use app_config::Config;
pub use memory::{InMemoryCartRepo, InMemoryProductRepo};
pub use settings::StaticSettings;
