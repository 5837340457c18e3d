//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Load server configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    let shown = path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);

    Ok(config)
}

/// Resolve the effective configuration: file (or defaults), then flags
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
    }
}

/// Start the server on a multi-threaded runtime and block until it exits
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        HttpServer::with_config(config).start().await.map_err(|e| {
            let detail = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("error", detail.as_str())]);
            CliError::serve_failed(detail)
        })
    })
}
