//! Typed configuration model for byte.
//!
//! This module defines the `ByteConfig` tree that `.byte/config.yaml` resolves
//! into, the enum field types, shared defaults, and environment overrides.
//! Construction goes through the schema validator (`crate::validate`); the
//! types here only describe the validated shape.

mod env;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use env::{DEV_MODE_ENV_VAR, EnvOverrides};
pub use model::{
    ByteConfig, CliConfig, EditFormatConfig, FilesConfig, LintCommand, LintConfig, LlmConfig,
    LspConfig, ProviderConfig, WatchConfig, WebConfig,
};
pub use operations::REDACTED;
pub use types::{ProviderName, SyntaxTheme, UiTheme, default_ignore_patterns};
