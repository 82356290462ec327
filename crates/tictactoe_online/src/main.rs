//! Tic-tac-toe client - unified CLI
//!
//! Local hot-seat play or matchmade online games.

use anyhow::Result;
use clap::Parser;
use tictactoe_online::{ClientConfig, Cli, Command, SessionEnd, terminal};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::load(&cli.config)?;
    initialize_tracing(&config);

    match cli.command {
        Command::Local => terminal::run_local().await,
        Command::Online { server_url } => {
            let config = match server_url {
                Some(url) => config.with_server_url(url),
                None => config,
            };
            run_online(&config).await
        }
    }
}

/// Run one online session
#[instrument(skip(config), fields(server_url = %config.server_url()))]
async fn run_online(config: &ClientConfig) -> Result<()> {
    match terminal::run_online(config.server_url()).await? {
        SessionEnd::Exited => info!("Left online game"),
        SessionEnd::Lost => info!("Online session lost"),
    }
    Ok(())
}

fn initialize_tracing(config: &ClientConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
