//! Serialization and display helpers for the resolved tree.

use super::model::ByteConfig;
use super::types::ProviderName;
use crate::error::{ConfigError, Result};

/// Replacement text for API keys in user-visible output.
pub const REDACTED: &str = "********";

impl ByteConfig {
    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ConfigError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Serialize config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ConfigError::UserError(format!("failed to serialize config to JSON: {}", e))
        })
    }

    /// Copy of this config with every API key replaced by [`REDACTED`].
    pub fn redacted(&self) -> ByteConfig {
        let mut copy = self.clone();
        for name in ProviderName::ALL {
            let provider = copy.llm.provider_mut(name);
            if provider.api_key.is_some() {
                provider.api_key = Some(REDACTED.to_string());
            }
        }
        copy
    }
}
