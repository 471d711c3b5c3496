//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Layer CLI flags over the file and environment configuration
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = ServerConfig::load(path)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    init_logging().map_err(|e| CliError::Logging(e.to_string()))?;

    let config = resolve_config(path, host, port)?;
    tracing::info!(address = %config.socket_addr(), "starting product API");

    let server = HttpServer::new(config);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(server.start())?;

    Ok(())
}

/// Print the effective configuration with the API key redacted
pub fn check_config(path: Option<&Path>) -> CliResult<()> {
    let config = ServerConfig::load(path)?;
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}
