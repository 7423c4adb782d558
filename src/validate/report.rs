//! Violations and warnings collected during validation.

use std::fmt;

/// A schema violation at a specific path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Present but of the wrong type.
    TypeMismatch {
        path: String,
        expected: String,
        actual: &'static str,
    },
    /// Enum field outside its permitted set.
    InvalidEnumValue {
        path: String,
        value: String,
        allowed: Vec<String>,
    },
    /// One element of an array-of-object field is unusable. The element is
    /// dropped; the rest of the array still merges.
    MalformedArrayElement {
        path: String,
        index: usize,
        reason: String,
    },
}

impl Violation {
    /// Path of the offending field.
    pub fn path(&self) -> &str {
        match self {
            Violation::TypeMismatch { path, .. }
            | Violation::InvalidEnumValue { path, .. }
            | Violation::MalformedArrayElement { path, .. } => path,
        }
    }

    /// Whether this violation only drops one element instead of aborting.
    pub fn is_element_scoped(&self) -> bool {
        matches!(self, Violation::MalformedArrayElement { .. })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TypeMismatch {
                path,
                expected,
                actual,
            } => write!(f, "{}: expected {}, found {}", path, expected, actual),
            Violation::InvalidEnumValue {
                path,
                value,
                allowed,
            } => write!(
                f,
                "{}: '{}' is not one of: {}",
                path,
                value,
                allowed.join(", ")
            ),
            Violation::MalformedArrayElement {
                path,
                index,
                reason,
            } => write!(f, "{}[{}]: {} (entry ignored)", path, index, reason),
        }
    }
}

/// Non-fatal findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A key the schema does not know. Kept for forward compatibility.
    UnknownKey { path: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownKey { path } => write!(f, "{}: unknown key ignored", path),
        }
    }
}

/// Everything a successful validation pass noticed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Array elements that were dropped.
    pub dropped: Vec<Violation>,
    pub warnings: Vec<Warning>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.warnings.is_empty()
    }
}
