//! Example to run the Valorant server standalone on the bundled catalog
//!
//! Run with: cargo run -p valorant-server --example run_server

use tracing_subscriber::EnvFilter;
use valorant_core::Catalog;
use valorant_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::default();
    let catalog = Catalog::bundled()?;

    println!("Starting Valorant server on port {}", config.port);
    println!("Try: curl http://localhost:{}/api/agents", config.port);

    run_server(config, catalog).await
}
