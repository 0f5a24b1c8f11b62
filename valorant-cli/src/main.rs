//! Valorant CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the HTTP API
//! - agents / maps: List the catalog
//! - analyze: Counter picks and tips against an enemy roster
//! - suggest: Rank agents to complete a partial team
//! - randomize: Build a full composition

mod analyze_cmd;
mod catalog_cmd;
mod randomize_cmd;
mod server;
mod suggest_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "valorant")]
#[command(about = "Valorant agent pick recommender")]
struct Cli {
    /// Seed data directory (agents.json, maps.json, tips.json); bundled data when omitted
    #[arg(long, global = true, value_name = "DIR")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve(server::ServerArgs),
    /// List all agents
    Agents(catalog_cmd::ListArgs),
    /// List all maps
    Maps(catalog_cmd::ListArgs),
    /// Find counter picks and tips for a matchup
    Analyze(analyze_cmd::AnalyzeArgs),
    /// Suggest agents to complete a team
    Suggest(suggest_cmd::SuggestArgs),
    /// Generate a full composition
    Randomize(randomize_cmd::RandomizeArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = catalog_cmd::load_catalog(cli.data.as_deref())?;

    match cli.command {
        Commands::Serve(args) => server::run(args, catalog),
        Commands::Agents(args) => catalog_cmd::run_agents(args, &catalog),
        Commands::Maps(args) => catalog_cmd::run_maps(args, &catalog),
        Commands::Analyze(args) => analyze_cmd::run(args, &catalog),
        Commands::Suggest(args) => suggest_cmd::run(args, &catalog),
        Commands::Randomize(args) => randomize_cmd::run(args, &catalog),
    }
}
