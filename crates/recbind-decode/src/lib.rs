//! # recbind-decode — Record Directory Decoding
//!
//! Turns a directory of flat `key: value` record files into one
//! strongly-typed [`Bindable`](recbind_schema::Bindable) target.
//!
//! ## Phases
//!
//! - **Scan** (`scan.rs`): each file's header is skipped, data lines are
//!   split on the first delimiter, and only keys the schema requires are
//!   kept. Files merge into one table; the last writer for a key wins.
//!
//! - **Bind** (`bind.rs`): each schema field is populated by the strategy
//!   its metadata selects. Failures are batched, never raised one by one.
//!
//! - **Decode** (`decoder.rs`): [`RecordDecoder`] runs both phases with a
//!   call-local table and error batch, and holds no other state.
//!
//! ## Usage
//!
//! ```no_run
//! use recbind_decode::{decode, Factory};
//!
//! let factory: Factory = decode("records/acme")?;
//! println!("{}", factory.title);
//! # Ok::<(), recbind_core::DecodeError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Record conventions live in [`ScanConfig`]; nothing is hard-coded in
//!   the scanner or binder.
//! - IO failures are returned with the failing path, never printed and
//!   skipped.

pub mod bind;
pub mod config;
pub mod decoder;
pub mod factory;
pub mod scan;

pub use bind::{bind_field, bind_fields, concatenate, parse_list};
pub use config::{ConfigError, ScanConfig};
pub use decoder::{decode, RecordDecoder};
pub use factory::Factory;
pub use scan::{record_files, scan_file, scan_record, split_line};
