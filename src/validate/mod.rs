//! Schema validation and default merging.
//!
//! Walks a raw tree against the schema registry in a single pass:
//! - Absent fields (or `null` for non-optional ones) take their schema default
//! - Wrong primitive types are `TypeMismatch`
//! - Enum values outside their set are `InvalidEnumValue`
//! - Array-of-object elements are validated one by one; a bad element is
//!   dropped as `MalformedArrayElement` and its siblings still merge
//! - Opaque maps are accepted verbatim once they are mappings
//! - Unknown keys are warnings, never errors
//!
//! All violations are collected before reporting, so one run shows every
//! problem in the file.

mod report;

#[cfg(test)]
mod tests;

pub use report::{ValidationReport, Violation, Warning};

use crate::error::ValidationError;
use crate::schema::{FieldKind, FieldSpec, SchemaRegistry, SectionSchema, join_path};
use serde_yaml::{Mapping, Value};

/// A fully populated tree plus the non-fatal findings of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub tree: Value,
    pub report: ValidationReport,
}

/// Validate `tree` against `registry` and merge in every default.
///
/// # Returns
///
/// * `Ok(Validated)` - Fully populated tree; dropped elements and unknown keys
///   are listed in the report
/// * `Err(ValidationError)` - Every structural violation found, followed by any
///   dropped elements
pub fn validate(tree: &Value, registry: &SchemaRegistry) -> Result<Validated, ValidationError> {
    let mut merger = Merger::default();
    let merged = merger.merge_section(registry.root(), Some(tree), "");

    if merger.violations.is_empty() {
        tracing::debug!(
            dropped = merger.report.dropped.len(),
            warnings = merger.report.warnings.len(),
            "config tree validated"
        );
        Ok(Validated {
            tree: Value::Mapping(merged),
            report: merger.report,
        })
    } else {
        let mut violations = merger.violations;
        violations.extend(merger.report.dropped);
        Err(ValidationError { violations })
    }
}

#[derive(Debug, Default)]
struct Merger {
    violations: Vec<Violation>,
    report: ValidationReport,
}

impl Merger {
    /// Merge a raw record over the section defaults.
    fn merge_section(&mut self, schema: &SectionSchema, raw: Option<&Value>, path: &str) -> Mapping {
        let mut merged = schema.defaults();

        let raw = match raw {
            None | Some(Value::Null) => return merged,
            Some(Value::Mapping(raw)) => raw,
            Some(other) => {
                self.mismatch(display_path(path), "mapping", other);
                return merged;
            }
        };

        for (key, value) in raw {
            let Some(name) = key.as_str() else {
                self.unknown_key(join_path(path, &key_label(key)));
                continue;
            };
            let Some(field) = schema.field(name) else {
                self.unknown_key(join_path(path, name));
                continue;
            };

            let field_path = join_path(path, name);
            if let Some(value) = self.merge_field(field, value, &field_path) {
                merged.insert(Value::String(name.to_string()), value);
            }
        }

        merged
    }

    /// Check one present field. `None` keeps the default.
    fn merge_field(&mut self, field: &FieldSpec, value: &Value, path: &str) -> Option<Value> {
        if value.is_null() && field.kind != FieldKind::OptionalString {
            return None;
        }

        match &field.kind {
            FieldKind::Boolean => match value {
                Value::Bool(_) => Some(value.clone()),
                other => self.mismatch(path.to_string(), "boolean", other),
            },
            FieldKind::Integer => match value {
                Value::Number(n) if n.as_u64().is_some() => Some(value.clone()),
                other => self.mismatch(path.to_string(), "non-negative integer", other),
            },
            FieldKind::String => match value {
                Value::String(_) => Some(value.clone()),
                other => self.mismatch(path.to_string(), "string", other),
            },
            FieldKind::OptionalString => match value {
                Value::String(_) | Value::Null => Some(value.clone()),
                other => self.mismatch(path.to_string(), "string", other),
            },
            FieldKind::Enum(allowed) => match value {
                Value::String(s) if allowed.iter().any(|v| *v == s.as_str()) => Some(value.clone()),
                Value::String(s) => {
                    self.violations.push(Violation::InvalidEnumValue {
                        path: path.to_string(),
                        value: s.clone(),
                        allowed: allowed.iter().map(|v| v.to_string()).collect(),
                    });
                    None
                }
                other => self.mismatch(path.to_string(), "string", other),
            },
            FieldKind::StringList => self.merge_string_list(value, path),
            FieldKind::Argv => match check_argv(value) {
                Ok(argv) => Some(argv),
                Err(_) => self.mismatch(path.to_string(), "non-empty command", value),
            },
            FieldKind::ObjectList(element) => self.merge_object_list(element, value, path),
            FieldKind::OpaqueMap => match value {
                Value::Mapping(map) if self.string_keys(map, path) => Some(value.clone()),
                Value::Mapping(_) => None,
                other => self.mismatch(path.to_string(), "mapping", other),
            },
            FieldKind::NamedMaps => self.merge_named_maps(value, path),
            FieldKind::Section(nested) => Some(Value::Mapping(self.merge_section(
                nested,
                Some(value),
                path,
            ))),
        }
    }

    fn merge_string_list(&mut self, value: &Value, path: &str) -> Option<Value> {
        let Value::Sequence(items) = value else {
            return self.mismatch(path.to_string(), "array of strings", value);
        };

        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            if !item.is_string() {
                self.mismatch(format!("{}[{}]", path, i), "string", item);
                ok = false;
            }
        }

        ok.then(|| value.clone())
    }

    fn merge_object_list(&mut self, element: &SectionSchema, value: &Value, path: &str) -> Option<Value> {
        let Value::Sequence(items) = value else {
            return self.mismatch(path.to_string(), "array", value);
        };

        let mut kept = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.merge_element(element, item, path, index) {
                Ok(merged) => kept.push(Value::Mapping(merged)),
                Err(reason) => {
                    tracing::warn!(path, index, reason = %reason, "dropping malformed array element");
                    self.report.dropped.push(Violation::MalformedArrayElement {
                        path: path.to_string(),
                        index,
                        reason,
                    });
                }
            }
        }

        Some(Value::Sequence(kept))
    }

    /// Validate one array element in isolation. `Err` carries the reason it
    /// is dropped.
    fn merge_element(
        &mut self,
        element: &SectionSchema,
        raw: &Value,
        path: &str,
        index: usize,
    ) -> Result<Mapping, String> {
        let Value::Mapping(raw) = raw else {
            return Err(format!("expected a mapping, found {}", kind_name(raw)));
        };

        let element_path = format!("{}[{}]", path, index);
        let mut merged = element.defaults();

        // Unknown keys are reported even when the element is dropped below.
        for key in raw.keys() {
            let known = key.as_str().is_some_and(|name| element.field(name).is_some());
            if !known {
                self.unknown_key(join_path(&element_path, &key_label(key)));
            }
        }

        for field in &element.fields {
            let value = match raw.get(field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(format!("missing required field `{}`", field.name));
                }
                None | Some(Value::Null) => continue,
                Some(value) => value,
            };

            let merged_value = if field.kind == FieldKind::Argv {
                check_argv(value)?
            } else {
                let mut scratch = Merger::default();
                let field_path = join_path(&element_path, field.name);
                let merged_value = scratch.merge_field(field, value, &field_path);
                for Warning::UnknownKey { path } in scratch.report.warnings {
                    self.unknown_key(path);
                }
                if let Some(first) = scratch.violations.first() {
                    return Err(first.to_string());
                }
                match merged_value {
                    Some(v) => v,
                    None => continue,
                }
            };

            merged.insert(Value::String(field.name.to_string()), merged_value);
        }

        Ok(merged)
    }

    fn merge_named_maps(&mut self, value: &Value, path: &str) -> Option<Value> {
        let Value::Mapping(map) = value else {
            return self.mismatch(path.to_string(), "mapping", value);
        };

        let mut ok = self.string_keys(map, path);
        let mut merged = Mapping::new();
        for (name, entry) in map {
            let entry_path = join_path(path, &key_label(name));
            match entry {
                Value::Mapping(_) => {
                    merged.insert(name.clone(), entry.clone());
                }
                Value::Null => {
                    merged.insert(name.clone(), Value::Mapping(Mapping::new()));
                }
                other => {
                    self.mismatch(entry_path, "mapping", other);
                    ok = false;
                }
            }
        }

        ok.then_some(Value::Mapping(merged))
    }

    /// Record a mismatch for every non-string key. Returns whether all keys
    /// were strings.
    fn string_keys(&mut self, map: &Mapping, path: &str) -> bool {
        let mut ok = true;
        for key in map.keys() {
            if !key.is_string() {
                self.mismatch(join_path(path, &key_label(key)), "string key", key);
                ok = false;
            }
        }
        ok
    }

    fn mismatch(&mut self, path: String, expected: &str, actual: &Value) -> Option<Value> {
        self.violations.push(Violation::TypeMismatch {
            path,
            expected: expected.to_string(),
            actual: kind_name(actual),
        });
        None
    }

    fn unknown_key(&mut self, path: String) {
        tracing::warn!(path = %path, "unknown config key ignored");
        self.report.warnings.push(Warning::UnknownKey { path });
    }
}

/// Normalize a lint command into a non-empty sequence of strings.
///
/// A single string is split shell-style (`"ruff check --fix"`).
fn check_argv(value: &Value) -> Result<Value, String> {
    let argv: Vec<String> = match value {
        Value::String(command) => shell_words::split(command)
            .map_err(|e| format!("`command` could not be parsed: {}", e))?,
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(format!(
                    "`command` entries must be strings, found {}",
                    kind_name(other)
                )),
            })
            .collect::<Result<_, _>>()?,
        other => {
            return Err(format!(
                "`command` must be a list of strings or a command string, found {}",
                kind_name(other)
            ));
        }
    };

    match argv.first() {
        None => Err("`command` must not be empty".to_string()),
        Some(program) if program.trim().is_empty() => {
            Err("`command` must start with a program name".to_string())
        }
        Some(_) => Ok(Value::Sequence(argv.into_iter().map(Value::String).collect())),
    }
}

/// Name of a value's type as shown to users.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => format!("<{} key>", kind_name(other)),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
