//! Export command - filtered view as delimited text
//!
//! The output carries the exact source header, so it re-parses through the
//! loader (round-trip).
//!
//! # Usage
//!
//! ```bash
//! vend export --segment Consumer --region East > filtered.csv
//! vend export --output filtered.csv
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use vend_analytics::apply;
use vend_config::Config;
use vend_dataset::write_csv;

use crate::cmd::{FilterArgs, build_criteria, load_dataset};

/// Export command arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the export command
pub fn run(args: ExportArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let criteria = build_criteria(&args.filter, &dataset)?;

    let filtered = apply(dataset.records(), &criteria)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            write_csv(&filtered, file)?;
            tracing::info!(path = %path.display(), rows = filtered.len(), "filtered view exported");
        }
        None => {
            write_csv(&filtered, io::stdout().lock())?;
        }
    }

    Ok(())
}
