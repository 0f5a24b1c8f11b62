//! Catalog commands - load the catalog and list its contents

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use valorant_core::Catalog;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load from a seed directory, or the bundled dataset
pub fn load_catalog(data: Option<&Path>) -> Result<Catalog> {
    match data {
        Some(dir) => Catalog::load_dir(dir)
            .with_context(|| format!("Failed to load seed data from {}", dir.display())),
        None => Catalog::bundled().context("Failed to load bundled seed data"),
    }
}

pub fn run_agents(args: ListArgs, catalog: &Catalog) -> Result<()> {
    if args.json {
        #[derive(serde::Serialize)]
        struct JsonAgent<'a> {
            name: &'a str,
            role: valorant_core::Role,
        }

        let agents: Vec<_> = catalog
            .list_agents()
            .iter()
            .map(|a| JsonAgent {
                name: &a.name,
                role: a.role,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }

    for agent in catalog.list_agents() {
        println!("{:<12} {:<11} {}", agent.name, agent.role, agent.tier);
    }
    Ok(())
}

pub fn run_maps(args: ListArgs, catalog: &Catalog) -> Result<()> {
    let names: Vec<&str> = catalog.list_maps().iter().map(|m| m.name.as_str()).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled() {
        let catalog = load_catalog(None).unwrap();
        assert!(!catalog.list_agents().is_empty());
    }

    #[test]
    fn test_load_missing_dir_fails_with_context() {
        let err = load_catalog(Some(Path::new("/nonexistent/seed"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed"));
    }
}
