//! Command-line interface for the exporter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ExportConfig;
use crate::content::{ContentProvider, ContentSnapshot};
use crate::error::Result;
use crate::exporter::{Collection, Exporter};
use crate::hooks::ExportHooks;
use crate::xml::{ExportOutput, OutputTarget};

/// WXR Exporter - Write a WordPress eXtended RSS export from a content snapshot.
#[derive(Parser)]
#[command(name = "wxr-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log every exported record
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export a YAML or JSON content snapshot as a WXR document.
    Export {
        /// Snapshot file (.yaml, .yml or .json)
        snapshot: PathBuf,

        /// Output file, or "-" for standard output (default: print the document)
        #[arg(short, long)]
        output: Option<String>,

        /// Indentation per nesting level, 0 for none
        #[arg(long, default_value_t = 1)]
        indent: usize,

        /// Indent with spaces instead of tabs
        #[arg(long)]
        spaces: bool,
    },

    /// Show what a content snapshot would export.
    Inspect {
        /// Snapshot file (.yaml, .yml or .json)
        snapshot: PathBuf,
    },
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export {
            snapshot,
            output,
            indent,
            spaces,
        } => export_command(&snapshot, output.as_deref(), indent, spaces),
        Commands::Inspect { snapshot } => inspect_command(&snapshot),
    }
}

/// Build the run settings from the indentation flags.
fn export_config(snapshot: &ContentSnapshot, indent: usize, spaces: bool) -> ExportConfig {
    let config = ExportConfig::default().with_filters(snapshot.filters.clone());
    if indent == 0 {
        config.compact()
    } else if spaces {
        config.with_space_indent(indent)
    } else {
        ExportConfig {
            indent_size: indent,
            ..config
        }
    }
}

/// Execute the export command.
fn export_command(
    snapshot_path: &Path,
    output: Option<&str>,
    indent: usize,
    spaces: bool,
) -> Result<()> {
    let snapshot = ContentSnapshot::from_path(snapshot_path)?;
    let target = OutputTarget::from_destination(output);
    let config = export_config(&snapshot, indent, spaces);

    // The summary goes to stderr so stdout can carry the document.
    eprintln!(
        "{} {} to {}",
        style("Exporting").bold(),
        style(&snapshot.site.name).cyan(),
        style(&target).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Writing document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut exporter = Exporter::new(snapshot, ExportHooks::new(), config);
    let result = exporter.export(&target);
    pb.finish_and_clear();
    let output = result?;

    let report = exporter.report();
    for collection in Collection::ALL {
        eprintln!("  {}: {}", collection, report.written(collection));
    }
    for (collection, fault) in report.faults() {
        eprintln!(
            "  {} {}: {}",
            style("Incomplete").yellow().bold(),
            collection,
            fault
        );
    }

    match output {
        ExportOutput::Document(document) => print!("{document}"),
        ExportOutput::Written(bytes) => {
            eprintln!(
                "{} {} ({} bytes)",
                style("Wrote").green().bold(),
                target,
                bytes
            );
        }
    }

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(snapshot_path: &Path) -> Result<()> {
    let snapshot = ContentSnapshot::from_path(snapshot_path)?;
    let counts = snapshot.counts();

    println!("{}", style(&snapshot.site.name).bold());
    println!("  URL: {}", snapshot.site.url);
    println!("  Encoding: {}", snapshot.encoding());
    if snapshot.site.is_multisite() {
        println!("  Multisite: {}", style("yes").cyan());
    }
    println!("  Users: {}", counts.users);
    println!("  Terms: {}", counts.terms);
    println!("  Links: {}", counts.links);
    println!("  Posts: {}", counts.posts);
    println!("  Media: {}", counts.media);
    println!("  Comments: {}", counts.comments);

    Ok(())
}
