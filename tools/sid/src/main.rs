//! sid - command-line access to scoped ids.
//!
//! Validates, parses, builds, and compares `scope/id[/version]` strings.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
