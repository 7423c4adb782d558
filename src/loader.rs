//! Raw config loading.
//!
//! Reads `.byte/config.yaml` into an untyped `serde_yaml::Value`. A missing file
//! is not an error: it loads as the empty tree, which resolves to all defaults.

use crate::error::{ConfigError, ParseError, Result};
use serde_yaml::{Mapping, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An untyped tree plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTree {
    pub tree: Value,
    /// The file the tree was read from, if it existed.
    pub source: Option<PathBuf>,
}

impl LoadedTree {
    /// The empty tree, equivalent to "use all defaults".
    pub fn empty() -> Self {
        Self {
            tree: empty_tree(),
            source: None,
        }
    }
}

/// The empty root mapping.
pub fn empty_tree() -> Value {
    Value::Mapping(Mapping::new())
}

/// Load the config file at `path`.
///
/// # Returns
///
/// * `Ok(LoadedTree)` - Parsed tree, or the empty tree if the file is absent
/// * `Err(ConfigError::Io)` - The file exists but cannot be read
/// * `Err(ConfigError::Parse)` - The file is not valid UTF-8 or not well-formed YAML
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoadedTree> {
    let path = path.as_ref();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(LoadedTree::empty());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let content = decode_utf8(bytes, path)?;
    let tree = parse_str(&content, Some(path))?;
    tracing::debug!(path = %path.display(), "config file parsed");

    Ok(LoadedTree {
        tree,
        source: Some(path.to_path_buf()),
    })
}

/// Invalid UTF-8 is a parse failure, positioned at the first bad byte.
fn decode_utf8(bytes: Vec<u8>, path: &Path) -> std::result::Result<String, ParseError> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = e.utf8_error().valid_up_to();
        let prefix = &e.as_bytes()[..valid];
        let line_start = prefix
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |i| i + 1);
        let line = prefix.iter().filter(|b| **b == b'\n').count() + 1;
        let column = String::from_utf8_lossy(&prefix[line_start..]).chars().count() + 1;
        ParseError {
            origin: Some(path.to_path_buf()),
            line: Some(line),
            column: Some(column),
            message: format!("invalid UTF-8 at byte offset {}", valid),
        }
    })
}

/// Parse YAML text into an untyped tree.
///
/// An empty document, or one that is only `null`, yields the empty tree.
pub fn parse_str(text: &str, origin: Option<&Path>) -> std::result::Result<Value, ParseError> {
    if text.trim().is_empty() {
        return Ok(empty_tree());
    }

    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        let location = e.location();
        ParseError {
            origin: origin.map(Path::to_path_buf),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
            message: e.to_string(),
        }
    })?;

    Ok(match value {
        Value::Null => empty_tree(),
        other => other,
    })
}
