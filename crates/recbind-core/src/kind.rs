//! # Field Kinds and Values
//!
//! The closed set of value shapes a target field can hold. `None` inside a
//! [`FieldValue`] is the null/unset representation for that kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The value shape of a target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A string, possibly null.
    Text,
    /// A signed 64-bit integer, possibly null.
    Integer,
    /// An ordered list of strings, possibly null.
    List,
}

impl FieldKind {
    /// Lowercase name, as used in schema dumps and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::List => "list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bound value handed to a target's `assign`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i64>),
    List(Option<Vec<String>>),
}

impl FieldValue {
    /// The kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::List(_) => FieldKind::List,
        }
    }

    /// Unwrap a text value for `field`, rejecting other kinds.
    pub fn into_text(self, field: &str) -> Result<Option<String>, SchemaError> {
        match self {
            Self::Text(v) => Ok(v),
            other => Err(mismatch(field, FieldKind::Text, &other)),
        }
    }

    /// Unwrap an integer value for `field`, rejecting other kinds.
    pub fn into_integer(self, field: &str) -> Result<Option<i64>, SchemaError> {
        match self {
            Self::Integer(v) => Ok(v),
            other => Err(mismatch(field, FieldKind::Integer, &other)),
        }
    }

    /// Unwrap a list value for `field`, rejecting other kinds.
    pub fn into_list(self, field: &str) -> Result<Option<Vec<String>>, SchemaError> {
        match self {
            Self::List(v) => Ok(v),
            other => Err(mismatch(field, FieldKind::List, &other)),
        }
    }
}

fn mismatch(field: &str, expected: FieldKind, found: &FieldValue) -> SchemaError {
    SchemaError::KindMismatch {
        field: field.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_text_accepts_text() {
        let v = FieldValue::Text(Some("Acme".to_string()));
        assert_eq!(v.into_text("title").unwrap(), Some("Acme".to_string()));
    }

    #[test]
    fn test_into_integer_rejects_text() {
        let err = FieldValue::Text(None).into_integer("amountOfWorkers").unwrap_err();
        assert_eq!(
            err,
            SchemaError::KindMismatch {
                field: "amountOfWorkers".to_string(),
                expected: FieldKind::Integer,
                found: FieldKind::Text,
            }
        );
    }

    #[test]
    fn test_null_list_is_preserved() {
        assert_eq!(FieldValue::List(None).into_list("departments").unwrap(), None);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FieldKind::Integer).unwrap(), "\"integer\"");
        assert_eq!(FieldKind::List.to_string(), "list");
    }
}
