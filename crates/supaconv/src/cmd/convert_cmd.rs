//! supaconv - convert a bank CSV export to SUPA tab-separated output.
//!
//! # Usage
//!
//! ```bash
//! supaconv export.csv
//! supaconv --format settlement abrechnung.csv
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use supaconv_core::MappingTable;
use tracing::Level;

use crate::pipeline::Pipeline;

/// Supported source formats, one fixed mapping table each.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SourceFormat {
    /// Giro bank-statement export (default)
    #[default]
    BankStatement,
    /// Settlement export with service-provider rows
    Settlement,
}

impl SourceFormat {
    fn table(self) -> MappingTable {
        match self {
            Self::BankStatement => MappingTable::bank_statement(),
            Self::Settlement => MappingTable::settlement(),
        }
    }
}

/// Convert a bank CSV export to SUPA tab-separated output on stdout.
#[derive(Parser, Debug)]
#[command(name = "supaconv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The CSV export to convert
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Source format of the input file
    #[arg(short, long, value_enum, default_value = "bank-statement")]
    format: SourceFormat,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the convert command.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout().lock();

    let pipeline = Pipeline::new(args.format.table());
    let rows = pipeline.run_file(&args.file, stdout)?;

    tracing::info!(rows, file = %args.file.display(), "conversion complete");
    Ok(())
}
