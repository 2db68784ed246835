//! # Bindable Targets
//!
//! The seam between the generic binder and a concrete target type. A
//! target describes itself with a static [`Schema`] and accepts bound
//! values through hand-written, typed dispatch in [`Bindable::assign`].

use recbind_core::{FieldValue, SchemaError};

use crate::descriptor::{FieldDescriptor, Schema};

/// A type that can be populated from a raw key table.
pub trait Bindable: Sized {
    /// The static field description of this type.
    fn schema() -> &'static Schema;

    /// Construct the zero-value instance that binding starts from.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Instantiation`] if the target cannot be built.
    fn instantiate() -> Result<Self, SchemaError>;

    /// Store a bound value in the field described by `field`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownField`] for a field this type does not
    /// have, or [`SchemaError::KindMismatch`] for a value of the wrong kind.
    fn assign(&mut self, field: &FieldDescriptor, value: FieldValue) -> Result<(), SchemaError>;
}
