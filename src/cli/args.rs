//! CLI argument definitions using clap
//!
//! Commands:
//! - product-catalog serve [--config <path>] [--host <host>] [--port <port>]
//! - product-catalog check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory product catalog HTTP API
#[derive(Parser, Debug)]
#[command(name = "product-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration (API key redacted) and exit
    CheckConfig {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
