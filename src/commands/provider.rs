//! Implementation of the `byte-config provider` command.

use crate::cli::GlobalArgs;
use byte_config::config::REDACTED;
use byte_config::error::Result;
use byte_config::index::ActiveProvider;

/// Execute the `byte-config provider` command.
///
/// Fails with exit code 3 if the selected provider is disabled or has no key.
pub fn cmd_provider(global: &GlobalArgs) -> Result<()> {
    let (resolved, _) = super::resolve(global)?;
    let provider = resolved.llm_provider()?;
    print!("{}", render_provider(&provider));
    Ok(())
}

pub(crate) fn render_provider(provider: &ActiveProvider) -> String {
    let mut out = format!("provider: {}\napi_key: {}\n", provider.name, REDACTED);
    if provider.model_params.is_empty() {
        out.push_str("model_params: {}\n");
    } else {
        out.push_str("model_params:\n");
        for (key, value) in &provider.model_params {
            let rendered = serde_json::to_string(value).unwrap_or_else(|_| "?".to_string());
            out.push_str(&format!("  {}: {}\n", key, rendered));
        }
    }
    out
}
