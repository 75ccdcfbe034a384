//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The interactive search/detail session
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;
mod session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cmd.log_level())
        .parse_default_env()
        .init();

    cmd.run().await
}
