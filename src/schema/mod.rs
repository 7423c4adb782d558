//! Schema registry for `.byte/config.yaml`.
//!
//! A static description of every section and field: its type, default and
//! constraint. The registry is built once per process and never mutated; the
//! validator walks it to merge a raw tree into a fully populated one.
//!
//! Paths are dotted (`llm.anthropic.api_key`). Fields of array elements use
//! `[]` for the element (`lint.commands[].command`).

mod types;


pub use types::{FieldKind, FieldSpec, SectionSchema};

use crate::config::types::{
    default_chrome_binary_location, default_ignore_patterns, default_lsp_timeout,
    default_mask_message_count, default_true,
};
use crate::config::{ProviderName, SyntaxTheme, UiTheme};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::builtin);

/// The process-wide registry.
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}

/// Lookup table over the fixed section hierarchy.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    root: SectionSchema,
    index: BTreeMap<String, FieldSpec>,
    order: Vec<String>,
}

impl SchemaRegistry {
    /// Build the registry for byte's configuration file.
    pub fn builtin() -> Self {
        let root = SectionSchema::new(vec![
            FieldSpec::section(
                "cli",
                SectionSchema::new(vec![
                    FieldSpec::enumeration(
                        "ui_theme",
                        UiTheme::VARIANTS,
                        UiTheme::default().as_str(),
                        "Colour theme for the interactive UI",
                    ),
                    FieldSpec::enumeration(
                        "syntax_theme",
                        SyntaxTheme::VARIANTS,
                        SyntaxTheme::default().as_str(),
                        "Highlighting style for code blocks",
                    ),
                ]),
                "Terminal rendering",
            ),
            FieldSpec::section(
                "edit_format",
                SectionSchema::new(vec![
                    FieldSpec::boolean(
                        "enable_shell_commands",
                        false,
                        "Allow shell commands to be proposed alongside edits",
                    ),
                    FieldSpec::integer(
                        "mask_message_count",
                        default_mask_message_count(),
                        "Recent assistant messages left unmasked in history",
                    ),
                ]),
                "Edit pipeline",
            ),
            FieldSpec::section(
                "files",
                SectionSchema::new(vec![
                    FieldSpec::string_list(
                        "ignore",
                        default_ignore_patterns(),
                        "Gitignore-style patterns excluded from file discovery",
                    ),
                    FieldSpec::section(
                        "watch",
                        SectionSchema::new(vec![FieldSpec::boolean(
                            "enable",
                            false,
                            "Watch project files for changes",
                        )]),
                        "File watcher",
                    ),
                ]),
                "File discovery",
            ),
            FieldSpec::section(
                "lint",
                SectionSchema::new(vec![
                    FieldSpec::boolean("enable", default_true(), "Run linters after edits"),
                    FieldSpec::object_list(
                        "commands",
                        SectionSchema::new(vec![
                            FieldSpec::argv("command", "Program and arguments; the file is appended"),
                            FieldSpec::string_list(
                                "languages",
                                Vec::new(),
                                "Languages handled; empty matches every language",
                            ),
                        ]),
                        "Lint commands in execution order",
                    ),
                ]),
                "Lint runner",
            ),
            FieldSpec::section(
                "llm",
                SectionSchema::new(vec![
                    FieldSpec::enumeration(
                        "model",
                        ProviderName::VARIANTS,
                        ProviderName::default().as_str(),
                        "Active LLM provider",
                    ),
                    FieldSpec::section("anthropic", provider_section(), "Anthropic provider"),
                    FieldSpec::section("gemini", provider_section(), "Gemini provider"),
                    FieldSpec::section("openai", provider_section(), "OpenAI provider"),
                ]),
                "LLM providers",
            ),
            FieldSpec::section(
                "lsp",
                SectionSchema::new(vec![
                    FieldSpec::boolean("enable", false, "Start language servers"),
                    FieldSpec::integer(
                        "timeout",
                        default_lsp_timeout(),
                        "Request timeout in seconds for every server",
                    ),
                    FieldSpec::named_maps("servers", "Server name to server settings"),
                ]),
                "Language servers",
            ),
            FieldSpec::section(
                "web",
                SectionSchema::new(vec![
                    FieldSpec::boolean("enable", false, "Enable web page fetching"),
                    FieldSpec::string(
                        "chrome_binary_location",
                        default_chrome_binary_location(),
                        "Path to the Chrome binary",
                    ),
                ]),
                "Headless browser",
            ),
        ]);

        Self::from_root(root)
    }

    /// Build a registry over an arbitrary root section.
    pub fn from_root(root: SectionSchema) -> Self {
        let mut index = BTreeMap::new();
        let mut order = Vec::new();
        index_section(&root, "", &mut index, &mut order);
        Self { root, index, order }
    }

    /// The root section.
    pub fn root(&self) -> &SectionSchema {
        &self.root
    }

    /// Look up a field by dotted path.
    pub fn lookup(&self, path: &str) -> Option<&FieldSpec> {
        self.index.get(path)
    }

    /// Complete default tree.
    pub fn defaults(&self) -> Value {
        Value::Mapping(self.root.defaults())
    }

    /// Every non-section field with its path, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.order
            .iter()
            .filter_map(|path| self.index.get(path).map(|spec| (path.as_str(), spec)))
    }

    /// Top-level section names.
    pub fn sections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.root.fields.iter().map(|f| f.name)
    }
}

fn provider_section() -> SectionSchema {
    SectionSchema::new(vec![
        FieldSpec::boolean("enable", false, "Allow this provider to be selected"),
        FieldSpec::optional_string("api_key", "API key; the provider's env var takes precedence"),
        FieldSpec::opaque_map("model_params", "Passed through to the provider client"),
    ])
}

/// Join a parent path and a field name.
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn index_section(
    schema: &SectionSchema,
    prefix: &str,
    index: &mut BTreeMap<String, FieldSpec>,
    order: &mut Vec<String>,
) {
    for field in &schema.fields {
        let path = join_path(prefix, field.name);
        index.insert(path.clone(), field.clone());
        match &field.kind {
            FieldKind::Section(nested) => index_section(nested, &path, index, order),
            FieldKind::ObjectList(element) => {
                order.push(path.clone());
                index_section(element, &format!("{}[]", path), index, order);
            }
            _ => order.push(path),
        }
    }
}
