use async_trait::async_trait;
use chrono::NaiveTime;
use std::collections::BTreeSet;

use crate::schedule::BlackoutWindow;

/// Admin-configured blackout keys, namespaced the way the scoped settings
/// store exposes them.
pub const FROM_WEEKDAYS_KEY: &str = "priority_delivery/priority_delivery_disable_time/from_weekdays";
pub const TO_WEEKDAYS_KEY: &str = "priority_delivery/priority_delivery_disable_time/to_weekdays";
pub const FROM_TIME_KEY: &str = "priority_delivery/priority_delivery_disable_time/from_time";
pub const TO_TIME_KEY: &str = "priority_delivery/priority_delivery_disable_time/to_time";
pub const TOOL_TIP_KEY: &str = "priority_delivery/priority_delivery_disable_time/tool_tip";

/// Key-value configuration store access
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_value(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(String),

    #[error("Invalid weekday list {value:?} for {key}")]
    InvalidWeekdays { key: String, value: String },

    #[error("Invalid time {value:?} for {key}")]
    InvalidTime { key: String, value: String },

    #[error("Configuration lookup failed for {key}: {source}")]
    Provider {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Load and parse the blackout window from the configuration store.
///
/// Weekday values are comma-separated integers 0(Sunday)-6(Saturday); time
/// values are comma-separated hour,minute[,second] parts, e.g. `"09,30"`.
/// Malformed values are a hard error here — the caller decides whether to
/// fail open, the loader never guesses.
pub async fn load_blackout_window(
    provider: &dyn ConfigProvider,
) -> Result<BlackoutWindow, ConfigError> {
    let from_weekdays = parse_weekdays(FROM_WEEKDAYS_KEY, &require(provider, FROM_WEEKDAYS_KEY).await?)?;
    let to_weekdays = parse_weekdays(TO_WEEKDAYS_KEY, &require(provider, TO_WEEKDAYS_KEY).await?)?;
    let from_time = parse_time(FROM_TIME_KEY, &require(provider, FROM_TIME_KEY).await?)?;
    let to_time = parse_time(TO_TIME_KEY, &require(provider, TO_TIME_KEY).await?)?;
    // The tooltip is cosmetic; absence is not a configuration error.
    let tooltip = fetch(provider, TOOL_TIP_KEY).await?.filter(|v| !v.is_empty());

    tracing::debug!(
        ?from_weekdays,
        ?to_weekdays,
        %from_time,
        %to_time,
        "loaded blackout window configuration"
    );

    Ok(BlackoutWindow {
        from_weekdays,
        to_weekdays,
        from_time,
        to_time,
        tooltip,
    })
}

async fn fetch(provider: &dyn ConfigProvider, key: &str) -> Result<Option<String>, ConfigError> {
    provider.get_value(key).await.map_err(|source| ConfigError::Provider {
        key: key.to_string(),
        source,
    })
}

async fn require(provider: &dyn ConfigProvider, key: &str) -> Result<String, ConfigError> {
    match fetch(provider, key).await? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

fn parse_weekdays(key: &str, raw: &str) -> Result<BTreeSet<u8>, ConfigError> {
    let invalid = || ConfigError::InvalidWeekdays {
        key: key.to_string(),
        value: raw.to_string(),
    };

    raw.split(',')
        .map(|part| {
            let day: u8 = part.trim().parse().map_err(|_| invalid())?;
            if day > 6 {
                return Err(invalid());
            }
            Ok(day)
        })
        .collect()
}

fn parse_time(key: &str, raw: &str) -> Result<NaiveTime, ConfigError> {
    let invalid = || ConfigError::InvalidTime {
        key: key.to_string(),
        value: raw.to_string(),
    };

    let parts: Vec<u32> = raw
        .split(',')
        .map(|part| part.trim().parse().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;

    let (hour, minute, second) = match parts.as_slice() {
        [h, m] => (*h, *m, 0),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(invalid()),
    };

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}
