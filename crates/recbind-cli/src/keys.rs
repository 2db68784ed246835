//! # Keys Subcommand
//!
//! Prints the raw key table a decode would bind from. Useful for finding
//! which record file a value came from when a decode fails.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use recbind_decode::{Factory, RecordDecoder};
use recbind_schema::{collect_required_keys, Bindable};

/// Arguments for the keys subcommand.
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Directory of record files.
    pub dir: PathBuf,

    /// YAML file overriding the record conventions.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the keys subcommand and return the JSON to print.
pub fn run_keys(args: &KeysArgs) -> anyhow::Result<String> {
    let decoder = RecordDecoder::new(crate::load_config(args.config.as_deref())?);
    let required = collect_required_keys(Factory::schema());
    let table = decoder
        .scan_directory(&args.dir, &required)
        .with_context(|| format!("scanning {}", args.dir.display()))?;
    crate::to_json(&table, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_shows_null_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.txt"),
            "general\ntitle: Acme\ndescription\nowner: Bob\n---\n",
        )
        .unwrap();
        let out = run_keys(&KeysArgs {
            dir: dir.path().to_path_buf(),
            config: None,
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["title"], "Acme");
        assert!(json["description"].is_null());
        assert!(json.get("owner").is_none());
    }
}
