use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    /// Reference time zone the blackout window is anchored to. All
    /// evaluations convert "now" into this zone, never the host's.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub blackout: BlackoutSettings,
}

/// Raw admin values for the blackout window, as stored: comma-separated
/// weekday numbers and comma-separated hour,minute time parts.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BlackoutSettings {
    pub from_weekdays: Option<String>,
    pub to_weekdays: Option<String>,
    pub from_time: Option<String>,
    pub to_time: Option<String>,
    pub tool_tip: Option<String>,
}

fn default_timezone() -> String {
    "Pacific/Auckland".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of DELIVERY)
            // Eg.. `DELIVERY_SERVER__PORT=8081` would set the server port
            .add_source(config::Environment::with_prefix("DELIVERY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
