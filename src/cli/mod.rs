//! Command-line interface wiring for the `codabar` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! submodule for each command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod alphabet;
pub mod common;
pub mod encode;
pub mod utils;

/// Parsed CLI entrypoint for the `codabar` binary.
#[derive(Parser, Debug)]
#[command(name = "codabar", version, about = "Codabar (NW-7) barcode writer")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode content into a Codabar symbol.
    Encode(encode::EncodeArgs),
    /// List the supported symbols and their wide/narrow patterns.
    Alphabet,
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::Alphabet => alphabet::handle(),
    }
}
