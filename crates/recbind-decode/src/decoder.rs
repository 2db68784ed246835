//! # Record Decoder
//!
//! One decode call, end to end:
//!
//! ```text
//! Schema ──validate──▶ collect_required_keys ──▶ RequiredKeys
//!                                                    │
//! dir ──record_files──▶ scan_file (per file) ◀──────┘
//!                            │ merge, last writer wins
//!                            ▼
//!                       RawKeyTable ──bind_fields──▶ T  or  DecodeError
//! ```
//!
//! The decoder holds only its [`ScanConfig`]. The key table and error
//! batches are local to each call, so one decoder can serve concurrent
//! calls.

use std::path::Path;

use recbind_core::{DecodeError, RawKeyTable, RequiredKeys, ScanFailure, ScanFailures};
use recbind_schema::{collect_required_keys, Bindable};

use crate::bind::bind_fields;
use crate::config::ScanConfig;
use crate::scan::{record_files, scan_file};

/// Decodes record directories into [`Bindable`] targets.
#[derive(Debug, Clone, Default)]
pub struct RecordDecoder {
    config: ScanConfig,
}

impl RecordDecoder {
    /// Create a decoder with the given record conventions.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The record conventions in use.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Decode every record file in `dir` into a `T`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Schema`] if `T`'s schema is malformed or `T`
    ///   cannot be built.
    /// - [`DecodeError::Directory`] if `dir` cannot be listed.
    /// - [`DecodeError::Unreadable`] listing every file that could not be
    ///   read. All files are attempted before this is returned.
    /// - [`DecodeError::Invalid`] with every field failure.
    pub fn decode<T: Bindable>(&self, dir: impl AsRef<Path>) -> Result<T, DecodeError> {
        let dir = dir.as_ref();
        let schema = T::schema();
        let _span = tracing::info_span!(
            "decode",
            type_name = schema.type_name(),
            dir = %dir.display()
        )
        .entered();

        schema.validate()?;
        let required = collect_required_keys(schema);
        let table = self.scan_directory(dir, &required)?;
        let target = self.bind_validated(&table)?;
        tracing::debug!(keys = table.len(), "decode succeeded");
        Ok(target)
    }

    /// Scan every record file in `dir` into a fresh key table.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Directory`] if `dir` cannot be listed, or
    /// [`DecodeError::Unreadable`] if any file failed.
    pub fn scan_directory(
        &self,
        dir: &Path,
        required: &RequiredKeys,
    ) -> Result<RawKeyTable, DecodeError> {
        let mut table = RawKeyTable::new();
        let mut failures = ScanFailures::new();

        for path in record_files(dir, &self.config)? {
            match scan_file(&path, required, &self.config) {
                Ok(pairs) => {
                    tracing::debug!(path = %path.display(), pairs = pairs.len(), "scanned record file");
                    for pair in pairs {
                        if table.contains_key(&pair.key) {
                            tracing::debug!(
                                key = %pair.key,
                                path = %path.display(),
                                "record key overridden"
                            );
                        }
                        table.merge(pair);
                    }
                }
                Err(source) => {
                    tracing::warn!(path = %path.display(), error = %source, "record file could not be read");
                    failures.push(ScanFailure { path, source });
                }
            }
        }

        if failures.is_empty() {
            Ok(table)
        } else {
            Err(DecodeError::Unreadable { failures })
        }
    }

    /// Bind an already-scanned key table into a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Schema`] or [`DecodeError::Invalid`].
    pub fn bind<T: Bindable>(&self, table: &RawKeyTable) -> Result<T, DecodeError> {
        T::schema().validate()?;
        self.bind_validated(table)
    }

    fn bind_validated<T: Bindable>(&self, table: &RawKeyTable) -> Result<T, DecodeError> {
        let mut target = T::instantiate()?;
        let errors = bind_fields(&mut target, table, &self.config)?;
        if errors.is_empty() {
            Ok(target)
        } else {
            Err(DecodeError::Invalid { errors })
        }
    }
}

/// Decode `dir` into a `T` with the default record conventions.
///
/// # Errors
///
/// As [`RecordDecoder::decode`].
pub fn decode<T: Bindable>(dir: impl AsRef<Path>) -> Result<T, DecodeError> {
    RecordDecoder::default().decode(dir)
}
