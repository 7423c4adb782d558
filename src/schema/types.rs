//! Field and section descriptors for the schema registry.

use serde_yaml::{Mapping, Value};

/// Type and constraint of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Boolean,
    /// Non-negative integer.
    Integer,
    String,
    /// String that may be absent or `null`.
    OptionalString,
    /// String restricted to a fixed set of values.
    Enum(&'static [&'static str]),
    StringList,
    /// Non-empty program + arguments. A single string is split shell-style.
    Argv,
    /// Sequence of records validated element by element.
    ObjectList(SectionSchema),
    /// Mapping forwarded verbatim.
    OpaqueMap,
    /// Mapping of names to mappings forwarded verbatim.
    NamedMaps,
    /// Nested record with its own fields and defaults.
    Section(SectionSchema),
}

impl FieldKind {
    /// Human-readable type and constraint.
    pub fn describe(&self) -> String {
        match self {
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Integer => "integer".to_string(),
            FieldKind::String => "string".to_string(),
            FieldKind::OptionalString => "optional string".to_string(),
            FieldKind::Enum(values) => format!("enum({})", values.join("|")),
            FieldKind::StringList => "array(string)".to_string(),
            FieldKind::Argv => "argv".to_string(),
            FieldKind::ObjectList(_) => "array(object)".to_string(),
            FieldKind::OpaqueMap => "object".to_string(),
            FieldKind::NamedMaps => "object(name -> object)".to_string(),
            FieldKind::Section(_) => "section".to_string(),
        }
    }

    /// Nested schema for sections and array elements.
    pub fn nested(&self) -> Option<&SectionSchema> {
        match self {
            FieldKind::Section(schema) | FieldKind::ObjectList(schema) => Some(schema),
            _ => None,
        }
    }
}

/// A named field with its type, default, and documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Value substituted when the field is absent. `Null` for required fields.
    pub default: Value,
    /// Required fields have no default; only array elements declare them.
    pub required: bool,
    pub description: &'static str,
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldKind, default: Value, description: &'static str) -> Self {
        Self {
            name,
            kind,
            default,
            required: false,
            description,
        }
    }

    pub fn boolean(name: &'static str, default: bool, description: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean, Value::Bool(default), description)
    }

    pub fn integer(name: &'static str, default: u64, description: &'static str) -> Self {
        Self::new(name, FieldKind::Integer, Value::from(default), description)
    }

    pub fn string(name: &'static str, default: String, description: &'static str) -> Self {
        Self::new(name, FieldKind::String, Value::String(default), description)
    }

    pub fn optional_string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::OptionalString, Value::Null, description)
    }

    pub fn enumeration(
        name: &'static str,
        values: &'static [&'static str],
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Enum(values),
            Value::String(default.to_string()),
            description,
        )
    }

    pub fn string_list(name: &'static str, default: Vec<String>, description: &'static str) -> Self {
        let default = Value::Sequence(default.into_iter().map(Value::String).collect());
        Self::new(name, FieldKind::StringList, default, description)
    }

    pub fn argv(name: &'static str, description: &'static str) -> Self {
        Self {
            required: true,
            ..Self::new(name, FieldKind::Argv, Value::Null, description)
        }
    }

    pub fn object_list(
        name: &'static str,
        element: SectionSchema,
        description: &'static str,
    ) -> Self {
        Self::new(
            name,
            FieldKind::ObjectList(element),
            Value::Sequence(Vec::new()),
            description,
        )
    }

    pub fn opaque_map(name: &'static str, description: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::OpaqueMap,
            Value::Mapping(Mapping::new()),
            description,
        )
    }

    pub fn named_maps(name: &'static str, description: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::NamedMaps,
            Value::Mapping(Mapping::new()),
            description,
        )
    }

    pub fn section(name: &'static str, schema: SectionSchema, description: &'static str) -> Self {
        let default = Value::Mapping(schema.defaults());
        Self::new(name, FieldKind::Section(schema), default, description)
    }
}

/// Ordered list of fields making up one record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionSchema {
    pub fields: Vec<FieldSpec>,
}

impl SectionSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Default mapping for this record. Required fields are left out.
    pub fn defaults(&self) -> Mapping {
        self.fields
            .iter()
            .filter(|f| !f.required)
            .map(|f| (Value::String(f.name.to_string()), f.default.clone()))
            .collect()
    }
}
