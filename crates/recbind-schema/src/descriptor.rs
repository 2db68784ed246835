//! # Field Descriptors
//!
//! Explicit, static description of a target type's fields. Each
//! [`FieldDescriptor`] names the raw key it is sourced from, its value
//! kind, and the metadata that selects its [`BindStrategy`].
//!
//! Descriptors are built with `const fn` so a schema is a plain `static`:
//!
//! ```
//! use recbind_schema::{FieldDescriptor, Schema};
//!
//! static PERSON: Schema = Schema::new(
//!     "Person",
//!     &[
//!         FieldDescriptor::text("nickname").required(),
//!         FieldDescriptor::text("fullName").concatenate(&["first", "last"], " "),
//!         FieldDescriptor::integer("age"),
//!     ],
//! );
//! assert!(PERSON.validate().is_ok());
//! ```

use serde::Serialize;

use recbind_core::{FieldKind, SchemaError};

/// Concatenate metadata: the field is derived by joining other keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Concatenate {
    /// Constituent raw keys, in join order.
    pub keys: &'static [&'static str],
    /// String placed between constituent values.
    pub delimiter: &'static str,
}

/// Description of one target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field identifier, reported in validation errors.
    pub name: &'static str,
    /// Raw key override. `None` means the key is `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'static str>,
    /// Value shape of the field.
    pub kind: FieldKind,
    /// Present on derived fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concatenate: Option<Concatenate>,
    /// NotBlank metadata: the field is required.
    pub not_blank: bool,
}

/// How the binder populates a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStrategy {
    /// Join constituent keys with a delimiter.
    Derived(Concatenate),
    /// Assign the raw string, failing if absent, null, or empty.
    Required,
    /// Parse the raw string as an integer; absent or null is unset.
    Numeric,
    /// Parse a bracketed list; absent is unset.
    List,
    /// Assign the raw string verbatim, null included.
    Plain,
}

impl BindStrategy {
    /// Lowercase name, used in logs and schema errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Derived(_) => "derived",
            Self::Required => "required",
            Self::Numeric => "numeric",
            Self::List => "list",
            Self::Plain => "plain",
        }
    }
}

impl FieldDescriptor {
    const fn of_kind(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            key: None,
            kind,
            concatenate: None,
            not_blank: false,
        }
    }

    /// A text field.
    pub const fn text(name: &'static str) -> Self {
        Self::of_kind(name, FieldKind::Text)
    }

    /// An integer field.
    pub const fn integer(name: &'static str) -> Self {
        Self::of_kind(name, FieldKind::Integer)
    }

    /// A list-of-strings field.
    pub const fn list(name: &'static str) -> Self {
        Self::of_kind(name, FieldKind::List)
    }

    /// Source the field from `key` instead of its own name.
    pub const fn keyed(self, key: &'static str) -> Self {
        Self {
            key: Some(key),
            ..self
        }
    }

    /// Attach NotBlank metadata.
    pub const fn required(self) -> Self {
        Self {
            not_blank: true,
            ..self
        }
    }

    /// Attach Concatenate metadata.
    pub const fn concatenate(self, keys: &'static [&'static str], delimiter: &'static str) -> Self {
        Self {
            concatenate: Some(Concatenate { keys, delimiter }),
            ..self
        }
    }

    /// The raw key this field is read from.
    pub fn raw_key(&self) -> &'static str {
        self.key.unwrap_or(self.name)
    }

    /// Whether the field carries Concatenate metadata.
    pub fn is_derived(&self) -> bool {
        self.concatenate.is_some()
    }

    /// Select the population strategy. Metadata takes precedence over kind.
    pub fn strategy(&self) -> BindStrategy {
        if let Some(c) = self.concatenate {
            return BindStrategy::Derived(c);
        }
        if self.not_blank {
            return BindStrategy::Required;
        }
        match self.kind {
            FieldKind::Integer => BindStrategy::Numeric,
            FieldKind::List => BindStrategy::List,
            FieldKind::Text => BindStrategy::Plain,
        }
    }

    fn check(&self, position: usize) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyFieldName { position });
        }
        if self.key == Some("") {
            return Err(SchemaError::EmptyKey {
                field: self.name.to_string(),
            });
        }
        if let Some(c) = &self.concatenate {
            if self.not_blank {
                return Err(SchemaError::DerivedAndRequired {
                    field: self.name.to_string(),
                });
            }
            if c.keys.is_empty() {
                return Err(SchemaError::EmptyConcatenation {
                    field: self.name.to_string(),
                });
            }
            if c.keys.iter().any(|k| k.is_empty()) {
                return Err(SchemaError::EmptyConstituentKey {
                    field: self.name.to_string(),
                });
            }
        }
        let strategy = self.strategy();
        if matches!(strategy, BindStrategy::Derived(_) | BindStrategy::Required)
            && self.kind != FieldKind::Text
        {
            return Err(SchemaError::UnsupportedKind {
                field: self.name.to_string(),
                strategy: strategy.as_str(),
                kind: self.kind,
            });
        }
        Ok(())
    }
}

/// A target type's ordered field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    type_name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl Schema {
    /// Describe a target type.
    pub const fn new(type_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { type_name, fields }
    }

    /// Name of the target type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check that every descriptor is well formed and names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in field order.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (position, field) in self.fields.iter().enumerate() {
            field.check(position)?;
            if self.fields[..position].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    field: field.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_precedence() {
        let derived = FieldDescriptor::text("full").concatenate(&["a", "b"], "-");
        assert!(matches!(derived.strategy(), BindStrategy::Derived(_)));
        assert_eq!(FieldDescriptor::text("t").required().strategy(), BindStrategy::Required);
        assert_eq!(FieldDescriptor::integer("n").strategy(), BindStrategy::Numeric);
        assert_eq!(FieldDescriptor::list("l").strategy(), BindStrategy::List);
        assert_eq!(FieldDescriptor::text("d").strategy(), BindStrategy::Plain);
    }

    #[test]
    fn test_raw_key_defaults_to_name() {
        assert_eq!(FieldDescriptor::text("title").raw_key(), "title");
        assert_eq!(FieldDescriptor::text("title").keyed("name").raw_key(), "name");
    }

    #[test]
    fn test_validate_rejects_derived_and_required() {
        static BAD: Schema = Schema::new(
            "Bad",
            &[FieldDescriptor::text("full").concatenate(&["a"], " ").required()],
        );
        assert_eq!(
            BAD.validate(),
            Err(SchemaError::DerivedAndRequired {
                field: "full".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_concatenation() {
        static BAD: Schema = Schema::new("Bad", &[FieldDescriptor::text("full").concatenate(&[], " ")]);
        assert!(matches!(BAD.validate(), Err(SchemaError::EmptyConcatenation { .. })));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        static BAD: Schema = Schema::new(
            "Bad",
            &[FieldDescriptor::text("title"), FieldDescriptor::integer("title")],
        );
        assert!(matches!(BAD.validate(), Err(SchemaError::DuplicateField { .. })));
    }

    #[test]
    fn test_validate_rejects_required_integer() {
        static BAD: Schema = Schema::new("Bad", &[FieldDescriptor::integer("count").required()]);
        match BAD.validate() {
            Err(SchemaError::UnsupportedKind { strategy, kind, .. }) => {
                assert_eq!(strategy, "required");
                assert_eq!(kind, FieldKind::Integer);
            }
            other => panic!("Expected UnsupportedKind, got: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_name_and_key() {
        static NO_NAME: Schema = Schema::new("Bad", &[FieldDescriptor::text("")]);
        assert_eq!(NO_NAME.validate(), Err(SchemaError::EmptyFieldName { position: 0 }));
        static NO_KEY: Schema = Schema::new("Bad", &[FieldDescriptor::text("title").keyed("")]);
        assert!(matches!(NO_KEY.validate(), Err(SchemaError::EmptyKey { .. })));
    }

    #[test]
    fn test_schema_serializes_metadata() {
        static S: Schema = Schema::new(
            "S",
            &[FieldDescriptor::text("full").concatenate(&["a", "b"], ", ")],
        );
        let json = serde_json::to_value(S).unwrap();
        assert_eq!(json["type_name"], "S");
        assert_eq!(json["fields"][0]["concatenate"]["keys"][1], "b");
        assert_eq!(json["fields"][0]["kind"], "text");
        assert!(json["fields"][0].get("key").is_none());
    }
}
