//! Command-line interface for desdemona.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Desdemona - play Othello against a remote decision service
#[derive(Parser, Debug)]
#[command(name = "desdemona")]
#[command(about = "Othello client that stays in sync with a decision service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the session configuration file
    #[arg(short, long, global = true, default_value = "desdemona.toml")]
    pub config: PathBuf,

    /// Decision service base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Bot difficulty (overrides config)
    #[arg(short, long, global = true)]
    pub difficulty: Option<u32>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal UI
    Play,

    /// Check the decision service: fetch the opening board and the human's moves
    Probe,
}
