//! oxide-meta CLI
//!
//! Command-line tool for inspecting FileMaker schema snapshots.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oxide_meta_core::{ColumnDefinition, TableSource};
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_meta_filemaker::data_type::NATIVE_TYPES;
use oxide_meta_filemaker::{FileMakerTableDefinition, SnapshotFile};

/// FileMaker schema introspection.
#[derive(Parser)]
#[command(name = "oxide-meta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file describing the FileMaker tables.
    #[arg(short, long, env = "OXIDE_META_SNAPSHOT", default_value = "snapshot.json")]
    snapshot: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the native types the FileMaker registry knows.
    Types,

    /// Print canonical columns as JSON.
    Columns {
        /// Table to introspect (all if not specified).
        #[arg(short, long)]
        table: Option<String>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Serialize)]
struct TableColumns {
    table: String,
    columns: Vec<ColumnDefinition>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Types => {
            println!(
                "{:<18} {:<18} {:<14} {}",
                "CONSTANT", "NATIVE NAME", "CATEGORY", "HOST TYPE"
            );
            println!("{:-<70}", "");
            for native in NATIVE_TYPES {
                println!(
                    "{:<18} {:<18} {:<14} {}",
                    native.constant, native.type_name, native.sql_type, native.host
                );
            }
        }

        Commands::Columns { table, pretty } => {
            let snapshot = SnapshotFile::load(&cli.snapshot)?;
            info!(
                "Loaded {} table(s) from {}",
                snapshot.tables.len(),
                cli.snapshot.display()
            );

            let sources = match &table {
                Some(name) => vec![snapshot.table(name)?],
                None => snapshot.sources().collect(),
            };

            let mut output = Vec::with_capacity(sources.len());
            for source in sources {
                let definition = FileMakerTableDefinition::new(source);
                output.push(TableColumns {
                    table: source.qualified_name(),
                    columns: definition.extract_columns()?,
                });
            }

            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
