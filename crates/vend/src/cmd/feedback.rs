//! Feedback command - record and list operator comments
//!
//! # Usage
//!
//! ```bash
//! vend feedback add "love the new trend chart"
//! vend feedback list
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use vend_config::Config;
use vend_feedback::FeedbackLog;

/// Feedback command arguments
#[derive(Args, Debug)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub command: FeedbackCommand,
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCommand {
    /// Append a comment to the feedback log
    Add {
        /// The comment text
        text: String,
    },

    /// List every stored comment, oldest first
    List,
}

/// Run the feedback command
pub fn run(args: FeedbackArgs, config: &Config) -> Result<()> {
    let log = FeedbackLog::new(&config.feedback.path);

    match args.command {
        FeedbackCommand::Add { text } => {
            let entry = log.append(&text)?;
            println!("recorded at {}", entry.timestamp);
        }
        FeedbackCommand::List => {
            let entries = log.entries()?;
            if entries.is_empty() {
                println!("(no feedback yet)");
                return Ok(());
            }
            for entry in entries {
                println!("[{}] {}", entry.timestamp, entry.comment);
            }
        }
    }

    Ok(())
}
