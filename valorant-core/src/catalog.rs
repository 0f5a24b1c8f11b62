//! Catalog - immutable store of agents, maps and tips
//!
//! Built once from seed data. Entities live in arenas and relationships are
//! stored as arena indices; a lowercased name index resolves lookups.
//! Unresolvable references in seed data are dropped, never errors.

use crate::agents::{Agent, AgentId, GameMap, MapId, Tip};
use crate::error::CatalogError;
use crate::seed::SeedData;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Read-only catalog shared by the analyzer, suggestion engine and randomizer
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    agents: Vec<Agent>,
    maps: Vec<GameMap>,
    tips: Vec<Tip>,
    agent_index: FxHashMap<String, AgentId>,
    map_index: FxHashMap<String, MapId>,
    tip_index: FxHashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog from seed records.
    ///
    /// Fails only on duplicate agent or map names (case-insensitive).
    pub fn from_seed(seed: SeedData) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();

        for name in &seed.maps {
            let map = GameMap::new(name);
            if catalog.map_index.contains_key(map.key()) {
                return Err(CatalogError::DuplicateMap(name.clone()));
            }
            catalog.map_index.insert(map.key().to_string(), catalog.maps.len());
            catalog.maps.push(map);
        }

        // First pass: identities, so relationships can point forward
        for record in &seed.agents {
            let agent = Agent::new(&record.name, record.role, record.tier);
            if catalog.agent_index.contains_key(agent.key()) {
                return Err(CatalogError::DuplicateAgent(record.name.clone()));
            }
            catalog.agent_index.insert(agent.key().to_string(), catalog.agents.len());
            catalog.agents.push(agent);
        }

        // Second pass: relationships
        for (id, record) in seed.agents.iter().enumerate() {
            let counters = catalog.resolve_agents(&record.name, "counters", &record.counters);
            let weak_against =
                catalog.resolve_agents(&record.name, "weakAgainst", &record.weak_against);
            let synergies = catalog.resolve_agents(&record.name, "synergies", &record.synergies);
            let map_preferences = catalog.resolve_maps(&record.name, &record.map_preferences);

            let agent = &mut catalog.agents[id];
            agent.counters = counters;
            agent.weak_against = weak_against;
            agent.synergies = synergies;
            agent.map_preferences = map_preferences;
        }

        for (key, contents) in seed.tips {
            for content in contents {
                catalog
                    .tip_index
                    .entry(key.clone())
                    .or_default()
                    .push(catalog.tips.len());
                catalog.tips.push(Tip {
                    key: key.clone(),
                    content,
                });
            }
        }

        tracing::info!(
            "Catalog loaded: {} agents, {} maps, {} tips",
            catalog.agents.len(),
            catalog.maps.len(),
            catalog.tips.len()
        );

        Ok(catalog)
    }

    /// Catalog over the dataset compiled into the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_seed(SeedData::bundled()?)
    }

    /// Catalog over a seed directory
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        Self::from_seed(SeedData::load_dir(dir)?)
    }

    /// All agents in seed order
    pub fn list_agents(&self) -> &[Agent] {
        &self.agents
    }

    /// All maps in seed order
    pub fn list_maps(&self) -> &[GameMap] {
        &self.maps
    }

    /// Case-insensitive agent lookup
    pub fn find_agent(&self, name: &str) -> Option<&Agent> {
        self.agent_id(name).map(|id| &self.agents[id])
    }

    pub fn agent_id(&self, name: &str) -> Option<AgentId> {
        self.agent_index.get(&name.to_lowercase()).copied()
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id]
    }

    /// Case-insensitive map lookup
    pub fn find_map(&self, name: &str) -> Option<&GameMap> {
        self.map_id(name).map(|id| &self.maps[id])
    }

    pub fn map_id(&self, name: &str) -> Option<MapId> {
        self.map_index.get(&name.to_lowercase()).copied()
    }

    pub fn map(&self, id: MapId) -> &GameMap {
        &self.maps[id]
    }

    /// Number of tips across all keys
    pub fn tip_count(&self) -> usize {
        self.tips.len()
    }

    /// Tips stored under exactly `key`, in seed order
    pub fn find_tips(&self, key: &str) -> Vec<&Tip> {
        self.tip_index
            .get(key)
            .map(|ids| ids.iter().map(|&i| &self.tips[i]).collect())
            .unwrap_or_default()
    }

    /// Agents listing `map` among their preferences (derived back-reference)
    pub fn agents_on_map(&self, map: &str) -> Vec<&Agent> {
        match self.map_id(map) {
            Some(map_id) => self
                .agents
                .iter()
                .filter(|a| a.map_preferences.contains(&map_id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolve a relationship's indices back into agents
    pub fn agents_in<'a>(&'a self, ids: &'a [AgentId]) -> impl Iterator<Item = &'a Agent> + 'a {
        ids.iter().map(move |&id| &self.agents[id])
    }

    fn resolve_agents(&self, owner: &str, relation: &str, names: &[String]) -> Vec<AgentId> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            match self.agent_id(name) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => tracing::debug!(
                    "{}: dropping unknown agent {:?} in {}",
                    owner,
                    name,
                    relation
                ),
            }
        }
        ids
    }

    fn resolve_maps(&self, owner: &str, names: &[String]) -> Vec<MapId> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            match self.map_id(name) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => tracing::debug!("{}: dropping unknown map {:?}", owner, name),
            }
        }
        ids
    }
}
