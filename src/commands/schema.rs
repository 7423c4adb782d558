//! Implementation of the `byte-config schema` command.

use byte_config::error::Result;
use byte_config::schema::{FieldSpec, SchemaRegistry, registry};
use serde_yaml::Value;

/// Execute the `byte-config schema` command.
pub fn cmd_schema() -> Result<()> {
    print!("{}", render_schema(registry()));
    Ok(())
}

/// One line per field: path, type, default, description.
pub(crate) fn render_schema(registry: &SchemaRegistry) -> String {
    let rows: Vec<(String, String, String, &str)> = registry
        .fields()
        .map(|(path, spec)| {
            (
                path.to_string(),
                spec.kind.describe(),
                render_default(spec),
                spec.description,
            )
        })
        .collect();

    let path_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0);
    let kind_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (path, kind, default, description) in rows {
        out.push_str(&format!(
            "{:<pw$}  {:<kw$}  {}  # {}\n",
            path,
            kind,
            default,
            description,
            pw = path_width,
            kw = kind_width
        ));
    }
    out
}

fn render_default(spec: &FieldSpec) -> String {
    if spec.required {
        return "(required)".to_string();
    }
    match &spec.default {
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "?".to_string()),
    }
}
