//! Active LLM provider resolution.

use crate::config::{LlmConfig, ProviderName, REDACTED};
use crate::error::{ConfigError, ProviderIssue, Result};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The provider selected by `llm.model`, known to be usable.
#[derive(Clone, PartialEq)]
pub struct ActiveProvider {
    pub name: ProviderName,
    pub api_key: String,
    pub model_params: BTreeMap<String, Value>,
}

impl fmt::Debug for ActiveProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveProvider")
            .field("name", &self.name)
            .field("api_key", &REDACTED)
            .field("model_params", &self.model_params)
            .finish()
    }
}

/// Resolve the provider named by `llm.model`.
///
/// # Returns
///
/// * `Ok(ActiveProvider)` - The provider is enabled and has a non-blank key
/// * `Err(ConfigError::ProviderNotEnabled)` - It is disabled or has no key
pub fn resolve_provider(llm: &LlmConfig) -> Result<ActiveProvider> {
    let name = llm.model;
    let provider = llm.provider(name);

    if !provider.enable {
        return Err(ConfigError::ProviderNotEnabled {
            provider: name,
            issue: ProviderIssue::Disabled,
        });
    }

    let api_key = provider
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::ProviderNotEnabled {
            provider: name,
            issue: ProviderIssue::MissingApiKey,
        })?;

    Ok(ActiveProvider {
        name,
        api_key: api_key.to_string(),
        model_params: provider.model_params.clone(),
    })
}
