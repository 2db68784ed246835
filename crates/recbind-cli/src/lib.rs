//! # recbind-cli — recbind Command-Line Interface
//!
//! Structured clap-based CLI over the decode library.
//!
//! ## Subcommands
//!
//! - `decode`: decode a record directory into a Factory, printed as JSON
//! - `keys`: print the merged raw key table of a record directory
//! - `schema`: print the Factory schema descriptors
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to library crates and return the text to
//!   print, so they are testable without a process boundary.

pub mod decode;
pub mod keys;
pub mod schema;

use std::path::Path;

use anyhow::Context;
use recbind_decode::ScanConfig;
use serde::Serialize;

/// Load a YAML scan config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ScanConfig> {
    match path {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("loading scan config {}", path.display())),
        None => Ok(ScanConfig::default()),
    }
}

/// Render `value` as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
