//! # Key Collector
//!
//! Computes the raw keys the scan phase must retain for a schema.

use recbind_core::RequiredKeys;

use crate::descriptor::Schema;

/// Collect the raw keys required by `schema`.
///
/// Derived fields contribute their constituent keys in declared order;
/// every other field contributes its own raw key. A key referenced by
/// several fields appears once, at its first position.
pub fn collect_required_keys(schema: &Schema) -> RequiredKeys {
    let mut keys = RequiredKeys::new();
    for field in schema.fields() {
        match &field.concatenate {
            Some(c) => {
                for key in c.keys {
                    keys.insert(*key);
                }
            }
            None => {
                keys.insert(field.raw_key());
            }
        }
    }
    keys
}
