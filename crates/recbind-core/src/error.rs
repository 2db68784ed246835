//! # Error Types — Decode Error Taxonomy
//!
//! Defines the error types surfaced by a decode call. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation failures (blank required field, missing concatenation
//!   constituent) and parse failures (non-numeric integer field) are
//!   batched per call as [`FieldErrors`]. Each entry keeps its
//!   [`FieldErrorKind`] so parse errors stay distinguishable.
//! - Unreadable record files are batched as [`ScanFailures`], each with
//!   the failing path.
//! - Schema errors are fatal to the call and never batched.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::kind::FieldKind;

/// Top-level error type for a decode call.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The record directory itself could not be listed.
    #[error("cannot list record directory '{}': {source}", .path.display())]
    Directory {
        /// The directory that was being enumerated.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// One or more record files could not be read.
    #[error("{} record file(s) could not be read:\n{failures}", .failures.len())]
    Unreadable {
        /// Every file that failed, in scan order.
        failures: ScanFailures,
    },

    /// One or more fields failed validation or type coercion.
    #[error("record data failed validation with {} error(s):\n{errors}", .errors.len())]
    Invalid {
        /// Every field failure, in schema field order.
        errors: FieldErrors,
    },

    /// The target schema is malformed or the target could not be built.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl DecodeError {
    /// The field failures carried by an [`DecodeError::Invalid`] error.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid { errors } => Some(errors),
            _ => None,
        }
    }

    /// The scan failures carried by an [`DecodeError::Unreadable`] error.
    pub fn scan_failures(&self) -> Option<&ScanFailures> {
        match self {
            Self::Unreadable { failures } => Some(failures),
            _ => None,
        }
    }
}

/// Error in the target schema or in target construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field descriptor has an empty name.
    #[error("field at position {position} has an empty name")]
    EmptyFieldName {
        /// Zero-based position in the schema field list.
        position: usize,
    },

    /// A field descriptor overrides its raw key with an empty string.
    #[error("field '{field}' has an empty raw key")]
    EmptyKey {
        /// Field name.
        field: String,
    },

    /// Two descriptors share a field name.
    #[error("field '{field}' is declared more than once")]
    DuplicateField {
        /// Field name.
        field: String,
    },

    /// A field carries both concatenate and not-blank metadata.
    #[error("field '{field}' is declared both derived and required")]
    DerivedAndRequired {
        /// Field name.
        field: String,
    },

    /// A derived field lists no constituent keys.
    #[error("derived field '{field}' lists no source keys")]
    EmptyConcatenation {
        /// Field name.
        field: String,
    },

    /// A derived field lists an empty constituent key.
    #[error("derived field '{field}' lists an empty source key")]
    EmptyConstituentKey {
        /// Field name.
        field: String,
    },

    /// Derived and required fields bind raw strings and must be text.
    #[error("{strategy} field '{field}' must be of kind text, found {kind}")]
    UnsupportedKind {
        /// Field name.
        field: String,
        /// The strategy that rejected the kind.
        strategy: &'static str,
        /// The declared kind.
        kind: FieldKind,
    },

    /// The target has no field with this name.
    #[error("target '{target}' has no field '{field}'")]
    UnknownField {
        /// Target type name.
        target: &'static str,
        /// Field name.
        field: String,
    },

    /// A value of the wrong kind was assigned to a field.
    #[error("field '{field}' expects a {expected} value, got {found}")]
    KindMismatch {
        /// Field name.
        field: String,
        /// Kind the target field holds.
        expected: FieldKind,
        /// Kind of the value that was assigned.
        found: FieldKind,
    },

    /// The zero-value target could not be constructed.
    #[error("cannot instantiate target '{target}': {reason}")]
    Instantiation {
        /// Target type name.
        target: &'static str,
        /// Reason construction failed.
        reason: String,
    },
}

/// Why a single field failed to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field is missing, null, or empty.
    Blank,
    /// A derived field references a key absent from every record.
    MissingConstituent,
    /// A value could not be coerced to the field's kind.
    Unparseable,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Blank => "blank",
            Self::MissingConstituent => "missing_constituent",
            Self::Unparseable => "unparseable",
        };
        f.write_str(s)
    }
}

/// A single field failure with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the failing field.
    pub field: String,
    /// Failure category.
    pub kind: FieldErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl FieldError {
    /// A required field that is absent, null, or empty.
    pub fn blank(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::Blank,
            message: format!("field '{field}' is empty in incoming records"),
        }
    }

    /// A derived field whose constituent `key` was never seen.
    pub fn missing_constituent(field: &str, key: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::MissingConstituent,
            message: format!("no '{key}' key in incoming records for derived field '{field}'"),
        }
    }

    /// A value that could not be parsed as the field's kind.
    pub fn unparseable(field: &str, raw: &str, reason: impl fmt::Display) -> Self {
        Self {
            field: field.to_string(),
            kind: FieldErrorKind::Unparseable,
            message: format!("cannot parse '{raw}' as an integer: {reason}"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field, self.message)
    }
}

/// Ordered collection of field failures from one decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all failures.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the failing fields, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// A record file that could not be opened or read.
#[derive(Error, Debug)]
#[error("{}: {source}", .path.display())]
pub struct ScanFailure {
    /// Path of the failing file.
    pub path: PathBuf,
    /// Underlying IO error.
    #[source]
    pub source: std::io::Error,
}

/// Ordered collection of scan failures from one decode call.
#[derive(Debug, Default)]
pub struct ScanFailures {
    failures: Vec<ScanFailure>,
}

impl ScanFailures {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure.
    pub fn push(&mut self, failure: ScanFailure) {
        self.failures.push(failure);
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns a slice of all failures.
    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ScanFailure> {
        self.failures
    }
}

impl fmt::Display for ScanFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {failure}")?;
        }
        Ok(())
    }
}
