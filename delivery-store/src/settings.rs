use async_trait::async_trait;
use std::collections::HashMap;

use delivery_core::settings::{
    ConfigProvider, FROM_TIME_KEY, FROM_WEEKDAYS_KEY, TOOL_TIP_KEY, TO_TIME_KEY, TO_WEEKDAYS_KEY,
};

use crate::app_config::BlackoutSettings;

/// In-memory key-value settings store; stands in for a scoped admin
/// configuration backend.
#[derive(Debug, Default)]
pub struct StaticSettings {
    values: HashMap<String, String>,
}

impl StaticSettings {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Map the app-config blackout block onto the namespaced settings keys
    /// the loader reads. Unset fields stay absent rather than empty.
    pub fn from_blackout(blackout: &BlackoutSettings) -> Self {
        let mut values = HashMap::new();
        let mut put = |key: &str, value: &Option<String>| {
            if let Some(v) = value {
                values.insert(key.to_string(), v.clone());
            }
        };

        put(FROM_WEEKDAYS_KEY, &blackout.from_weekdays);
        put(TO_WEEKDAYS_KEY, &blackout.to_weekdays);
        put(FROM_TIME_KEY, &blackout.from_time);
        put(TO_TIME_KEY, &blackout.to_time);
        put(TOOL_TIP_KEY, &blackout.tool_tip);

        Self { values }
    }
}

#[async_trait]
impl ConfigProvider for StaticSettings {
    async fn get_value(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.values.get(key).cloned())
    }
}
