//! Command-line interface for the tic-tac-toe client.

use clap::{Parser, Subcommand};

/// Tic-tac-toe - local hot-seat or matchmade online play
#[derive(Parser, Debug)]
#[command(name = "tictactoe_online")]
#[command(about = "Tic-tac-toe client with local and online modes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the client config file
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two players taking turns at one terminal
    Local,

    /// Find an opponent through the matchmaking server
    Online {
        /// Server WebSocket URL (overrides config and environment)
        #[arg(long)]
        server_url: Option<String>,
    },
}
