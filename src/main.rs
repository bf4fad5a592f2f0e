//! Desdemona - Othello session client
//!
//! Plays against a remote decision service in the terminal.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use desdemona::{DecisionService, HttpDecisionClient, Player, SessionConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Play => tui::run_tui(config).await,
        Command::Probe => run_probe(config).await,
    }
}

/// Resolves configuration: file, then environment, then command-line flags.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = SessionConfig::load_or_default(&cli.config)?.with_env_overrides();
    if let Some(url) = &cli.service_url {
        config = config.with_service_url(url.clone());
    }
    if let Some(difficulty) = cli.difficulty {
        config = config.with_difficulty(difficulty);
    }
    config.validate()?;
    Ok(config)
}

/// Fetch the opening board and the human's legal moves, then print them
#[instrument(skip(config), fields(service_url = %config.service_url()))]
async fn run_probe(config: SessionConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Probing decision service");
    let client = HttpDecisionClient::new(config.service_url(), config.request_timeout())?;

    let board = client.initial_board().await?;
    let mut actions: Vec<_> = client
        .actions(&board, Player::Human)
        .await?
        .into_iter()
        .collect();
    actions.sort();

    println!("Service: {}", client.base_url());
    println!("{}", board);
    println!(
        "Human moves: {}",
        actions
            .iter()
            .map(|position| position.key())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(())
}
