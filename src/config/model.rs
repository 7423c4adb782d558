//! Typed configuration tree and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Fully resolved configuration for byte.
///
/// This struct represents the contents of `.byte/config.yaml` after schema
/// validation: every field is present, unset fields carry their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ByteConfig {
    pub cli: CliConfig,
    pub edit_format: EditFormatConfig,
    pub files: FilesConfig,
    pub lint: LintConfig,
    pub llm: LlmConfig,
    pub lsp: LspConfig,
    pub web: WebConfig,
}

/// Terminal rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Colour theme for the interactive UI.
    pub ui_theme: UiTheme,

    /// Highlighting style for code blocks.
    pub syntax_theme: SyntaxTheme,
}

/// Edit pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditFormatConfig {
    /// Allow the assistant to propose shell commands alongside edits.
    pub enable_shell_commands: bool,

    /// Number of recent assistant messages left unmasked in history.
    pub mask_message_count: u64,
}

impl Default for EditFormatConfig {
    fn default() -> Self {
        Self {
            enable_shell_commands: false,
            mask_message_count: default_mask_message_count(),
        }
    }
}

/// File discovery and watching settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Gitignore-style patterns excluded from discovery, OR-combined.
    pub ignore: Vec<String>,

    pub watch: WatchConfig,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignore_patterns(),
            watch: WatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WatchConfig {
    pub enable: bool,
}

/// Lint runner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub enable: bool,

    /// Lint commands in execution order.
    pub commands: Vec<LintCommand>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enable: default_true(),
            commands: Vec::new(),
        }
    }
}

/// A single lint command entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintCommand {
    /// Program and arguments; the file path is appended when run.
    pub command: Vec<String>,

    /// Languages this command applies to. Empty matches every language.
    #[serde(default)]
    pub languages: Vec<String>,
}

impl LintCommand {
    /// Whether this entry applies to every language.
    pub fn is_wildcard(&self) -> bool {
        self.languages.is_empty()
    }

    /// Command rendered for display, shell-quoted.
    pub fn display(&self) -> String {
        shell_words::join(&self.command)
    }
}

/// LLM provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LlmConfig {
    /// The active provider.
    pub model: ProviderName,

    pub anthropic: ProviderConfig,
    pub gemini: ProviderConfig,
    pub openai: ProviderConfig,
}

impl LlmConfig {
    /// Settings for the named provider.
    pub fn provider(&self, name: ProviderName) -> &ProviderConfig {
        match name {
            ProviderName::Anthropic => &self.anthropic,
            ProviderName::Gemini => &self.gemini,
            ProviderName::Openai => &self.openai,
        }
    }

    pub(crate) fn provider_mut(&mut self, name: ProviderName) -> &mut ProviderConfig {
        match name {
            ProviderName::Anthropic => &mut self.anthropic,
            ProviderName::Gemini => &mut self.gemini,
            ProviderName::Openai => &mut self.openai,
        }
    }
}

/// Settings for one LLM provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub enable: bool,

    pub api_key: Option<String>,

    /// Forwarded verbatim to the provider client.
    pub model_params: BTreeMap<String, Value>,
}

/// Language server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LspConfig {
    pub enable: bool,

    /// Request timeout in seconds, shared by every server.
    pub timeout: u64,

    /// Server name to its opaque settings, forwarded to the LSP manager.
    /// Declaration order is kept.
    pub servers: Mapping,
}

impl Default for LspConfig {
    fn default() -> Self {
        Self {
            enable: false,
            timeout: default_lsp_timeout(),
            servers: Mapping::new(),
        }
    }
}

/// Headless browser settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub enable: bool,
    pub chrome_binary_location: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            enable: false,
            chrome_binary_location: PathBuf::from(default_chrome_binary_location()),
        }
    }
}
