//! # recbind-schema — Target Schema Description
//!
//! Replaces runtime field introspection with an explicit, static schema:
//! an ordered list of [`FieldDescriptor`]s carrying the field name, raw
//! key, value kind, and the metadata that selects how the field is bound.
//!
//! ## Metadata
//!
//! - **Concatenate**: the field is derived by joining several raw keys
//!   with a delimiter. Its own name is never read from records.
//! - **NotBlank**: the field is required; a missing, null, or empty value
//!   is a validation error.
//!
//! A field is never both derived and required; [`Schema::validate`]
//! rejects that combination along with other malformed descriptors.
//!
//! ## Key Collection
//!
//! [`collect_required_keys`] turns a schema into the set of raw keys the
//! record scanner retains. Unlisted keys in record files are dropped.
//!
//! ## Crate Policy
//!
//! - Depends only on `recbind-core` internally.
//! - Schemas are `static`; nothing here allocates per decode call except
//!   the collected key set.

pub mod bindable;
pub mod descriptor;
pub mod keys;

pub use bindable::Bindable;
pub use descriptor::{BindStrategy, Concatenate, FieldDescriptor, Schema};
pub use keys::collect_required_keys;
