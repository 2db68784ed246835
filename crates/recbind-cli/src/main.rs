//! # recbind CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// recbind: decode record directories into typed objects.
///
/// Scans a directory of `key: value` record files, binds the keys onto
/// the Factory schema, and prints the result or every validation error.
#[derive(Parser, Debug)]
#[command(name = "recbind", version, about)]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode a record directory into a Factory.
    Decode(recbind_cli::decode::DecodeArgs),
    /// Print the merged raw key table of a record directory.
    Keys(recbind_cli::keys::KeysArgs),
    /// Print the Factory schema.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let output = match &cli.command {
        Commands::Decode(args) => recbind_cli::decode::run_decode(args)?,
        Commands::Keys(args) => recbind_cli::keys::run_keys(args)?,
        Commands::Schema => recbind_cli::schema::run_schema()?,
    };
    println!("{output}");

    Ok(())
}
