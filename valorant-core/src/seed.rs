//! Seed data records
//!
//! Seed directories hold three JSON files:
//! - `agents.json`: array of agent records
//! - `maps.json`: array of map names
//! - `tips.json`: object mapping a tip key to a list of tips

use crate::agents::{Role, Tier};
use crate::error::CatalogError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUNDLED_AGENTS: &str = include_str!("data/agents.json");
const BUNDLED_MAPS: &str = include_str!("data/maps.json");
const BUNDLED_TIPS: &str = include_str!("data/tips.json");

/// Agent as it appears in seed data, relationships still by name
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub name: String,
    pub role: Role,
    pub tier: Tier,
    #[serde(default)]
    pub counters: Vec<String>,
    // Older seed files spell this `tweakAgainst`
    #[serde(default, alias = "tweakAgainst")]
    pub weak_against: Vec<String>,
    #[serde(default)]
    pub map_preferences: Vec<String>,
    #[serde(default)]
    pub synergies: Vec<String>,
}

impl AgentRecord {
    /// Record with no relationships
    pub fn new(name: &str, role: Role, tier: Tier) -> Self {
        Self {
            name: name.to_string(),
            role,
            tier,
            counters: Vec::new(),
            weak_against: Vec::new(),
            map_preferences: Vec::new(),
            synergies: Vec::new(),
        }
    }

    pub fn with_counters(mut self, names: &[&str]) -> Self {
        self.counters = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_weak_against(mut self, names: &[&str]) -> Self {
        self.weak_against = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_map_preferences(mut self, names: &[&str]) -> Self {
        self.map_preferences = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_synergies(mut self, names: &[&str]) -> Self {
        self.synergies = names.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Complete seed dataset, as consumed by [`crate::Catalog::from_seed`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub agents: Vec<AgentRecord>,
    pub maps: Vec<String>,
    pub tips: BTreeMap<String, Vec<String>>,
}

impl SeedData {
    /// Dataset compiled into the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        let origin = Path::new("<bundled>");
        Ok(Self {
            agents: parse(BUNDLED_AGENTS, &origin.join("agents.json"))?,
            maps: parse(BUNDLED_MAPS, &origin.join("maps.json"))?,
            tips: parse(BUNDLED_TIPS, &origin.join("tips.json"))?,
        })
    }

    /// Load `agents.json`, `maps.json` and `tips.json` from a directory.
    ///
    /// A missing `tips.json` is treated as an empty tip set.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let agents = read_json(&dir.join("agents.json"))?;
        let maps = read_json(&dir.join("maps.json"))?;

        let tips_path = dir.join("tips.json");
        let tips = if tips_path.exists() {
            read_json(&tips_path)?
        } else {
            tracing::warn!("No tips.json in {}, continuing without tips", dir.display());
            BTreeMap::new()
        };

        Ok(Self { agents, maps, tips })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn parse<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, CatalogError> {
    serde_json::from_str(content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}
