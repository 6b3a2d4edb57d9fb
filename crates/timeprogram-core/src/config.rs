//! Editor configuration.
//!
//! ```toml
//! entity = "sensor.remko_mqtt_timeprogram_dhw_a"
//! title = "DHW schedule"   # optional; falls back to the entity's friendly name
//! default_start = "06:00"  # optional, picker seed for start times
//! default_stop = "22:00"   # optional, picker seed for stop times
//! ```

use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Host entity carrying the `timeprogram` attribute.
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_start")]
    pub default_start: TimeOfDay,
    #[serde(default = "default_stop")]
    pub default_stop: TimeOfDay,
}

fn default_start() -> TimeOfDay {
    TimeOfDay::from_minutes_wrapping(8 * 60)
}

fn default_stop() -> TimeOfDay {
    TimeOfDay::from_minutes_wrapping(12 * 60)
}

impl EditorConfig {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            title: None,
            default_start: default_start(),
            default_stop: default_stop(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
