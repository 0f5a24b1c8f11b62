//! Server command - start the HTTP API
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to valorant-server crate)
//! - Level 4: configuration validation

use std::net::Ipv4Addr;

use anyhow::{Context, Result};
use clap::Args;

use valorant_core::Catalog;
use valorant_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// IPv4 address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs, catalog: Catalog) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting Valorant API server on port {}", config.port);

    start_server(config, catalog)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    Ok(ServerConfig {
        host: parse_host(&args.host)?,
        port: args.port,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig, catalog: Catalog) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config, catalog).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Parse the bind address
fn parse_host(host: &str) -> Result<[u8; 4]> {
    let addr: Ipv4Addr = host
        .parse()
        .with_context(|| format!("Invalid IPv4 bind address: {}", host))?;
    Ok(addr.octets())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServerArgs {
            port: 3000,
            host: "0.0.0.0".to_string(),
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, [0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_host_rejects_garbage() {
        assert_eq!(parse_host("127.0.0.1").unwrap(), [127, 0, 0, 1]);
        assert!(parse_host("localhost:3000").is_err());
    }
}
