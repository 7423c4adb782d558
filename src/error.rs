//! Error types for byte-config.
//!
//! Uses thiserror for derive macros. Every failure in the resolution pipeline is
//! returned as a `ConfigError`; the CLI renders it and maps it to an exit code.

use crate::config::ProviderName;
use crate::exit_codes;
use crate::validate::Violation;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// The config file exists but could not be read.
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not well-formed YAML.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The config file violates the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The selected LLM provider cannot be used.
    #[error("LLM provider '{provider}' is not usable: {issue}")]
    ProviderNotEnabled {
        provider: ProviderName,
        issue: ProviderIssue,
    },

    /// The config file watcher failed.
    #[error("config watcher failed: {0}")]
    Watch(#[from] notify::Error),
}

impl ConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::UserError(_) | ConfigError::Io { .. } => exit_codes::USER_ERROR,
            ConfigError::Parse(_) | ConfigError::Validation(_) => exit_codes::CONFIG_FAILURE,
            ConfigError::ProviderNotEnabled { .. } => exit_codes::PROVIDER_FAILURE,
            ConfigError::Watch(_) => exit_codes::WATCH_FAILURE,
        }
    }
}

/// Result type alias for byte-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Malformed YAML, with the position reported by the parser when available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// File the text came from, if any.
    pub origin: Option<PathBuf>,
    /// 1-based line of the offending token.
    pub line: Option<usize>,
    /// 1-based column of the offending token.
    pub column: Option<usize>,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse config YAML")?;
        if let Some(origin) = &self.origin {
            write!(f, " '{}'", origin.display())?;
        }
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " at line {}, column {}", line, column)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Every schema violation found in a single validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config validation failed with {} problem(s):",
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "\n  x {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Why the selected provider cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderIssue {
    /// `enable` is false.
    Disabled,
    /// `api_key` is absent or blank.
    MissingApiKey,
}

impl fmt::Display for ProviderIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderIssue::Disabled => write!(f, "provider is disabled (set enable: true)"),
            ProviderIssue::MissingApiKey => write!(f, "no api_key configured"),
        }
    }
}
