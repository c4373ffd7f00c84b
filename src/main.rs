//! # tb CLI
//!
//! Binary entry point for the `tb` command-line tool. It parses arguments
//! with `clap` and dispatches to a command. All resolution and orchestration
//! logic lives in the `tb` library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
