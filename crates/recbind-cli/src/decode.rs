//! # Decode Subcommand
//!
//! Decodes a record directory into a Factory and prints it as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use recbind_decode::{Factory, RecordDecoder};

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Directory of record files.
    pub dir: PathBuf,

    /// YAML file overriding the record conventions.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the decode subcommand and return the JSON to print.
///
/// Every validation error of the directory is part of the returned error.
pub fn run_decode(args: &DecodeArgs) -> anyhow::Result<String> {
    let decoder = RecordDecoder::new(crate::load_config(args.config.as_deref())?);
    let factory: Factory = decoder
        .decode(&args.dir)
        .with_context(|| format!("decoding {}", args.dir.display()))?;
    tracing::info!(title = %factory.title, "decoded factory");
    crate::to_json(&factory, args.pretty)
}
