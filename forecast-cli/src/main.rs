//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Diagnostic logging to an append-only file
//! - Interactive location prompts
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod logging;
mod prompt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    logging::init(logging::LOG_FILE)?;
    cmd.run().await
}
