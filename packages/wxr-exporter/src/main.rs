//! CLI entry point for the exporter.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wxr_exporter::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // WARN by default, INFO with --verbose; RUST_LOG overrides both.
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
