//! Language server index.

use super::language::{extension_of, language_for_path, normalize_language};
use crate::config::LspConfig;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// A configured language server.
///
/// `command` and `languages` are read from the server's settings when they are
/// present; the full mapping is kept in `settings` for the LSP manager.
#[derive(Debug, Clone, PartialEq)]
pub struct LspServer {
    pub name: String,
    pub command: Vec<String>,
    pub languages: Vec<String>,
    pub settings: Mapping,
}

impl LspServer {
    fn from_settings(name: &str, settings: &Mapping) -> Self {
        Self {
            name: name.to_string(),
            command: strings(settings.get("command")),
            languages: strings(settings.get("languages")),
            settings: settings.clone(),
        }
    }
}

/// Servers with the uniform request timeout and a language lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LspIndex {
    enable: bool,
    timeout: Duration,
    servers: Vec<LspServer>,
    by_language: BTreeMap<String, usize>,
}

impl LspIndex {
    /// Index servers in declaration order. A language claimed by several
    /// servers goes to the last one declared.
    pub fn build(config: &LspConfig) -> Self {
        let mut servers: Vec<LspServer> = Vec::with_capacity(config.servers.len());
        let mut by_language: BTreeMap<String, usize> = BTreeMap::new();

        for (key, value) in &config.servers {
            let Some(name) = key.as_str() else {
                continue;
            };
            let settings = value.as_mapping().cloned().unwrap_or_default();
            let server = LspServer::from_settings(name, &settings);
            let position = servers.len();

            for language in &server.languages {
                let key = normalize_language(language);
                if key.is_empty() {
                    continue;
                }
                if let Some(previous) = by_language.insert(key.clone(), position) {
                    if previous != position {
                        tracing::warn!(
                            language = %key,
                            server = %name,
                            replaced = %servers[previous].name,
                            "language claimed by a later server"
                        );
                    }
                }
            }
            servers.push(server);
        }

        Self {
            enable: config.enable,
            timeout: Duration::from_secs(config.timeout),
            servers,
            by_language,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enable
    }

    /// Request timeout applied to every server.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Servers in declaration order.
    pub fn servers(&self) -> impl Iterator<Item = &LspServer> {
        self.servers.iter()
    }

    pub fn server(&self, name: &str) -> Option<&LspServer> {
        self.servers.iter().find(|server| server.name == name)
    }

    /// The server handling `language`, case-insensitive.
    pub fn server_for_language(&self, language: &str) -> Option<&LspServer> {
        self.by_language
            .get(&normalize_language(language))
            .and_then(|&position| self.servers.get(position))
    }

    /// The server for a file, by detected language and then by extension.
    pub fn server_for_path(&self, path: &Path) -> Option<&LspServer> {
        language_for_path(path)
            .and_then(|language| self.server_for_language(language))
            .or_else(|| extension_of(path).and_then(|ext| self.server_for_language(&ext)))
    }
}

impl Default for LspIndex {
    fn default() -> Self {
        Self::build(&LspConfig::default())
    }
}

fn strings(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) => shell_words::split(s).unwrap_or_default(),
        _ => Vec::new(),
    }
}
