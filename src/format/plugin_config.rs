//! Per-call plugin configuration
//!
//! The host passes a JSON object as the third dispatch argument. The bridge
//! does not know which keys an action cares about, so every key is kept and
//! actions read what they need:
//!
//! ```json
//! { "locale": "de", "limit": 10 }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration parsed fresh from the config text of each call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(flatten)]
    settings: Map<String, Value>,
}

impl PluginConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text. Only a JSON object is accepted.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Get a raw setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Get a setting decoded into `T`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        self.settings
            .get(key)
            .map(|v| T::deserialize(v))
            .transpose()
    }

    /// Whether the config has no settings
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}
