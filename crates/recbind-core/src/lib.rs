//! # recbind-core — Foundational Types for recbind
//!
//! This crate is the leaf of the recbind workspace. It defines the values
//! that flow between the scan phase and the bind phase of a decode call,
//! and the error taxonomy surfaced to callers.
//!
//! ## Key Design Principles
//!
//! 1. **Absent is not null.** The [`RawKeyTable`] stores `Option<String>`
//!    values, so a key that was never seen and a key that was seen with no
//!    value are distinct states. Derived-field binding depends on this.
//!
//! 2. **Errors are batched, not raised.** Field-level failures are
//!    collected into [`FieldErrors`]; unreadable files into
//!    [`ScanFailures`]. A decode call surfaces the whole batch at once.
//!
//! 3. **No shared mutable state.** Every table and batch here is a plain
//!    owned value, built fresh per decode call.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `recbind-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod table;

// Re-export primary types for ergonomic imports.
pub use error::{
    DecodeError, FieldError, FieldErrorKind, FieldErrors, ScanFailure, ScanFailures, SchemaError,
};
pub use kind::{FieldKind, FieldValue};
pub use table::{RawKeyTable, RecordPair, RequiredKeys};
