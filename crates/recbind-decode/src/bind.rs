//! # Field Binder
//!
//! Populates a [`Bindable`] target from a [`RawKeyTable`], one field at a
//! time, in schema order. Field failures are collected into a
//! [`FieldErrors`] batch and never stop the pass, so every field is
//! attempted exactly once.
//!
//! | Strategy | Absent key        | Null value        | Present value                  |
//! |----------|-------------------|-------------------|--------------------------------|
//! | derived  | error             | empty constituent | joined with the delimiter      |
//! | required | error             | error             | error if empty, else verbatim  |
//! | numeric  | unset             | unset             | parsed as `i64`, else error    |
//! | list     | unset             | unset             | brackets stripped and split    |
//! | plain    | unset             | unset             | verbatim                       |

use recbind_core::{FieldError, FieldErrors, FieldValue, RawKeyTable, SchemaError};
use recbind_schema::{BindStrategy, Bindable, Concatenate, FieldDescriptor};

use crate::config::ScanConfig;

/// Bind every field of `target`'s schema from `table`.
///
/// Returns the batch of field failures, empty when every field bound.
///
/// # Errors
///
/// Returns a [`SchemaError`] if the target rejects an assignment. That is
/// a defect in the target's schema or `assign`, not in the record data,
/// and aborts the pass.
pub fn bind_fields<T: Bindable>(
    target: &mut T,
    table: &RawKeyTable,
    config: &ScanConfig,
) -> Result<FieldErrors, SchemaError> {
    let mut errors = FieldErrors::new();
    for field in T::schema().fields() {
        match bind_field(field, table, config) {
            Ok(value) => target.assign(field, value)?,
            Err(error) => {
                tracing::debug!(
                    field = field.name,
                    kind = %error.kind,
                    "field failed to bind"
                );
                errors.push(error);
            }
        }
    }
    Ok(errors)
}

/// Compute the value of a single field.
///
/// # Errors
///
/// Returns the [`FieldError`] for this field's strategy.
pub fn bind_field(
    field: &FieldDescriptor,
    table: &RawKeyTable,
    config: &ScanConfig,
) -> Result<FieldValue, FieldError> {
    let key = field.raw_key();
    match field.strategy() {
        BindStrategy::Derived(c) => concatenate(field.name, &c, table).map(|s| FieldValue::Text(Some(s))),
        BindStrategy::Required => require(field.name, key, table).map(|s| FieldValue::Text(Some(s))),
        BindStrategy::Numeric => parse_integer(field.name, key, table).map(FieldValue::Integer),
        BindStrategy::List => Ok(FieldValue::List(
            table.value(key).map(|raw| parse_list(raw, config)),
        )),
        BindStrategy::Plain => Ok(FieldValue::Text(table.value(key).map(str::to_string))),
    }
}

/// Join the constituent values of a derived field.
///
/// A constituent seen with a null value counts as the empty string.
///
/// # Errors
///
/// Returns a missing-constituent error naming the first absent key.
pub fn concatenate(
    field: &str,
    concat: &Concatenate,
    table: &RawKeyTable,
) -> Result<String, FieldError> {
    let mut parts = Vec::with_capacity(concat.keys.len());
    for key in concat.keys {
        match table.get(key) {
            Some(value) => parts.push(value.unwrap_or_default()),
            None => return Err(FieldError::missing_constituent(field, key)),
        }
    }
    Ok(parts.join(concat.delimiter))
}

fn require(field: &str, key: &str, table: &RawKeyTable) -> Result<String, FieldError> {
    match table.value(key) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(FieldError::blank(field)),
    }
}

fn parse_integer(field: &str, key: &str, table: &RawKeyTable) -> Result<Option<i64>, FieldError> {
    table
        .value(key)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|e| FieldError::unparseable(field, raw, e))
        })
        .transpose()
}

/// Parse a bracketed list value such as `[Casting, Assembly, Paint]`.
///
/// Bracket and separator characters are removed and the rest is split on
/// single spaces. Empty segments are dropped, so `[]` is an empty list.
pub fn parse_list(raw: &str, config: &ScanConfig) -> Vec<String> {
    let stripped: String = raw
        .chars()
        .filter(|c| *c != config.list_open && *c != config.list_close && *c != config.list_separator)
        .collect();
    stripped
        .split(' ')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use recbind_core::{FieldErrorKind, FieldKind, RecordPair};
    use recbind_schema::Schema;

    fn table(pairs: Vec<RecordPair>) -> RawKeyTable {
        pairs.into_iter().collect()
    }

    const NAME: Concatenate = Concatenate {
        keys: &["last", "first", "middle"],
        delimiter: " ",
    };

    #[test]
    fn test_concatenate_joins_in_declared_order() {
        let t = table(vec![
            RecordPair::new("first", "Ivan"),
            RecordPair::new("middle", "Petrovich"),
            RecordPair::new("last", "Sidorov"),
        ]);
        assert_eq!(concatenate("fullName", &NAME, &t).unwrap(), "Sidorov Ivan Petrovich");
    }

    #[test]
    fn test_concatenate_null_constituent_is_empty() {
        let t = table(vec![
            RecordPair::new("first", "Ivan"),
            RecordPair::null("middle"),
            RecordPair::new("last", "Sidorov"),
        ]);
        assert_eq!(concatenate("fullName", &NAME, &t).unwrap(), "Sidorov Ivan ");
    }

    #[test]
    fn test_concatenate_missing_constituent_names_key() {
        let t = table(vec![RecordPair::new("first", "Ivan"), RecordPair::new("last", "Sidorov")]);
        let err = concatenate("fullName", &NAME, &t).unwrap_err();
        assert_eq!(err.field, "fullName");
        assert_eq!(err.kind, FieldErrorKind::MissingConstituent);
        assert!(err.message.contains("'middle'"));
    }

    #[test]
    fn test_required_rejects_absent_null_and_empty() {
        let field = FieldDescriptor::text("title").required();
        let config = ScanConfig::default();
        for t in [
            table(vec![]),
            table(vec![RecordPair::null("title")]),
            table(vec![RecordPair::new("title", "")]),
        ] {
            let err = bind_field(&field, &t, &config).unwrap_err();
            assert_eq!(err.kind, FieldErrorKind::Blank);
        }
        let t = table(vec![RecordPair::new("title", "Acme")]);
        assert_eq!(
            bind_field(&field, &t, &config).unwrap(),
            FieldValue::Text(Some("Acme".to_string()))
        );
    }

    #[test]
    fn test_numeric_parses_and_reports() {
        let field = FieldDescriptor::integer("amountOfWorkers");
        let config = ScanConfig::default();
        let ok = table(vec![RecordPair::new("amountOfWorkers", "42")]);
        assert_eq!(bind_field(&field, &ok, &config).unwrap(), FieldValue::Integer(Some(42)));
        assert_eq!(bind_field(&field, &table(vec![]), &config).unwrap(), FieldValue::Integer(None));
        let null = table(vec![RecordPair::null("amountOfWorkers")]);
        assert_eq!(bind_field(&field, &null, &config).unwrap(), FieldValue::Integer(None));
        let bad = table(vec![RecordPair::new("amountOfWorkers", "abc")]);
        let err = bind_field(&field, &bad, &config).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Unparseable);
        assert!(err.message.contains("'abc'"));
    }

    #[test]
    fn test_list_parsing() {
        let config = ScanConfig::default();
        assert_eq!(parse_list("[A, B, C]", &config), vec!["A", "B", "C"]);
        assert_eq!(parse_list("[Casting]", &config), vec!["Casting"]);
        assert!(parse_list("[]", &config).is_empty());
        assert_eq!(parse_list("A,  B", &config), vec!["A", "B"]);
    }

    #[test]
    fn test_list_absent_or_null_is_unset() {
        let field = FieldDescriptor::list("departments");
        let config = ScanConfig::default();
        assert_eq!(bind_field(&field, &table(vec![]), &config).unwrap(), FieldValue::List(None));
        let null = table(vec![RecordPair::null("departments")]);
        assert_eq!(bind_field(&field, &null, &config).unwrap(), FieldValue::List(None));
    }

    #[test]
    fn test_plain_keeps_value_verbatim() {
        let field = FieldDescriptor::text("description");
        let config = ScanConfig::default();
        let t = table(vec![RecordPair::new("description", "")]);
        assert_eq!(bind_field(&field, &t, &config).unwrap(), FieldValue::Text(Some(String::new())));
        assert_eq!(bind_field(&field, &table(vec![]), &config).unwrap(), FieldValue::Text(None));
        let null = table(vec![RecordPair::null("description")]);
        assert_eq!(bind_field(&field, &null, &config).unwrap(), FieldValue::Text(None));
    }

    #[test]
    fn test_keyed_field_reads_override() {
        let field = FieldDescriptor::integer("workers").keyed("amountOfWorkers");
        let t = table(vec![RecordPair::new("amountOfWorkers", "7")]);
        assert_eq!(
            bind_field(&field, &t, &ScanConfig::default()).unwrap(),
            FieldValue::Integer(Some(7))
        );
    }

    #[derive(Debug, Default)]
    struct Wrong;

    static WRONG: Schema = Schema::new("Wrong", &[FieldDescriptor::text("title")]);

    impl Bindable for Wrong {
        fn schema() -> &'static Schema {
            &WRONG
        }

        fn instantiate() -> Result<Self, SchemaError> {
            Ok(Self)
        }

        fn assign(&mut self, field: &FieldDescriptor, value: FieldValue) -> Result<(), SchemaError> {
            value.into_integer(field.name).map(|_| ())
        }
    }

    #[test]
    fn test_assign_rejection_aborts_with_schema_error() {
        let mut target = Wrong;
        let err = bind_fields(&mut target, &RawKeyTable::new(), &ScanConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::KindMismatch {
                field: "title".to_string(),
                expected: FieldKind::Integer,
                found: FieldKind::Text,
            }
        );
    }

    proptest! {
        #[test]
        fn prop_concatenation_is_ordered_join(
            values in proptest::collection::vec("[a-z]{0,6}", 3),
            delimiter in proptest::sample::select(vec![" ", ", ", "-", "::", ""]),
        ) {
            static KEYS: &[&str] = &["k0", "k1", "k2"];
            let t: RawKeyTable = KEYS
                .iter()
                .zip(&values)
                .map(|(k, v)| RecordPair::new(*k, v.clone()))
                .collect();
            let c = Concatenate { keys: KEYS, delimiter };
            let joined = concatenate("f", &c, &t).unwrap();
            prop_assert_eq!(&joined, &values.join(delimiter));
            if !delimiter.is_empty() && !values[2].is_empty() {
                prop_assert!(!joined.ends_with(delimiter));
            }
        }
    }
}
