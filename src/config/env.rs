//! Environment variable overrides applied after validation.
//!
//! A non-empty `ANTHROPIC_API_KEY`, `GEMINI_API_KEY` or `OPENAI_API_KEY` enables
//! that provider and sets its key, taking precedence over the file.
//! `BYTE_DEV_MODE` set to `true`, `1` or `yes` turns on development mode.

use super::model::ByteConfig;
use super::types::ProviderName;
use std::collections::BTreeMap;

/// Variable that turns on development mode.
pub const DEV_MODE_ENV_VAR: &str = "BYTE_DEV_MODE";

/// Overrides captured from the environment once, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// API keys found in the environment, by provider.
    pub api_keys: BTreeMap<ProviderName, String>,

    /// Whether development mode was requested.
    pub dev_mode: bool,
}

impl EnvOverrides {
    /// No overrides at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Capture overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Capture overrides through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_keys = ProviderName::ALL
            .into_iter()
            .filter_map(|name| {
                lookup(name.api_key_env_var())
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
                    .map(|key| (name, key))
            })
            .collect();

        let dev_mode = lookup(DEV_MODE_ENV_VAR)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        Self { api_keys, dev_mode }
    }

    /// Whether nothing was overridden, API keys and development mode alike.
    pub fn is_empty(&self) -> bool {
        self.api_keys.is_empty() && !self.dev_mode
    }

    /// Apply the API key overrides to a validated config.
    pub fn apply(&self, config: &mut ByteConfig) {
        for (name, key) in &self.api_keys {
            tracing::info!(
                provider = %name,
                env_var = name.api_key_env_var(),
                "enabling provider from environment"
            );
            let provider = config.llm.provider_mut(*name);
            provider.enable = true;
            provider.api_key = Some(key.clone());
        }
    }
}
