//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `forum_search` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use forum_search::initialization::init_logger;
use forum_search::{run_search, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    init_logger(log_level.into()).context("Failed to initialize logger")?;

    match run_search(config).await {
        Ok(outcome) => {
            if !outcome.status_message.is_empty() {
                println!("{}", outcome.status_message);
            }
            if !outcome.info.is_empty() {
                println!("{}", outcome.info);
            }
            for record in &outcome.results {
                println!(
                    "{} {} (post {})",
                    record.result_ordinal, record.thread_title, record.post_id
                );
                println!("    {}", record.posted_at);
                println!("    {}", record.blurb);
            }
            if outcome.results.is_empty() {
                println!("No results.");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("forum_search error: {:#}", e);
            process::exit(1);
        }
    }
}
