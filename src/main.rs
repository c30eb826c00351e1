//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `signal_detector` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Process exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use signal_detector::initialization::init_logger_with;
use signal_detector::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("signal_detector error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
