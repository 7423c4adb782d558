//! Enum field types and default values for the config tree.
//!
//! The `default_*` functions are shared by the typed `Default` impls and the
//! schema registry, so both always agree on what an unset field resolves to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour theme for the interactive CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UiTheme {
    #[default]
    Mocha,
    Macchiato,
    Latte,
    Frappe,
}

impl UiTheme {
    /// Every accepted spelling, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["mocha", "macchiato", "latte", "frappe"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mocha => "mocha",
            Self::Macchiato => "macchiato",
            Self::Latte => "latte",
            Self::Frappe => "frappe",
        }
    }

    /// Parse a UI theme from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mocha" => Some(Self::Mocha),
            "macchiato" => Some(Self::Macchiato),
            "latte" => Some(Self::Latte),
            "frappe" => Some(Self::Frappe),
            _ => None,
        }
    }
}

/// Highlighting style used for code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SyntaxTheme {
    GithubDark,
    Bw,
    Sas,
    Staroffice,
    Xcode,
    #[default]
    Monokai,
    Lightbulb,
    Rrt,
}

impl SyntaxTheme {
    /// Every accepted spelling, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &[
        "github-dark",
        "bw",
        "sas",
        "staroffice",
        "xcode",
        "monokai",
        "lightbulb",
        "rrt",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GithubDark => "github-dark",
            Self::Bw => "bw",
            Self::Sas => "sas",
            Self::Staroffice => "staroffice",
            Self::Xcode => "xcode",
            Self::Monokai => "monokai",
            Self::Lightbulb => "lightbulb",
            Self::Rrt => "rrt",
        }
    }

    /// Parse a syntax theme from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "github-dark" => Some(Self::GithubDark),
            "bw" => Some(Self::Bw),
            "sas" => Some(Self::Sas),
            "staroffice" => Some(Self::Staroffice),
            "xcode" => Some(Self::Xcode),
            "monokai" => Some(Self::Monokai),
            "lightbulb" => Some(Self::Lightbulb),
            "rrt" => Some(Self::Rrt),
            _ => None,
        }
    }
}

/// LLM provider selected by `llm.model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderName {
    #[default]
    Anthropic,
    Gemini,
    Openai,
}

impl ProviderName {
    /// Every accepted spelling, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["anthropic", "gemini", "openai"];

    /// All providers, in declaration order.
    pub const ALL: [ProviderName; 3] = [Self::Anthropic, Self::Gemini, Self::Openai];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
            Self::Openai => "openai",
        }
    }

    /// Parse a provider name from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "anthropic" => Some(Self::Anthropic),
            "gemini" => Some(Self::Gemini),
            "openai" => Some(Self::Openai),
            _ => None,
        }
    }

    /// Environment variable that supplies this provider's API key.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
            Self::Openai => "OPENAI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default gitignore-style patterns excluded from file discovery.
pub fn default_ignore_patterns() -> Vec<String> {
    vec![
        ".byte/cache".to_string(),
        ".ruff_cache".to_string(),
        ".idea".to_string(),
        ".vscode".to_string(),
        ".venv".to_string(),
        "venv".to_string(),
        ".env".to_string(),
        ".git".to_string(),
        "__pycache__".to_string(),
        "node_modules".to_string(),
        "dist".to_string(),
        "build".to_string(),
        "*.pyc".to_string(),
    ]
}

// Default value functions for serde
pub(crate) fn default_mask_message_count() -> u64 {
    1
}
pub(crate) fn default_lsp_timeout() -> u64 {
    30
}
pub(crate) fn default_chrome_binary_location() -> String {
    "/usr/bin/google-chrome".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
