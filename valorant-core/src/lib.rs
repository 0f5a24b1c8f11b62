//! Valorant Core - Agent catalog and pick recommendation engine
//!
//! This crate provides the recommendation logic:
//! - Agent, map and tip definitions
//! - Seed data loading (bundled or from a directory)
//! - Immutable catalog with case-insensitive lookup
//! - Match analysis (counter picks and tips)
//! - Suggestion scoring for partial teams
//! - Greedy composition randomizer

pub mod agents;
pub mod analysis;
pub mod catalog;
pub mod error;
pub mod randomize;
pub mod seed;
pub mod suggest;

// Re-exports for convenient access
pub use agents::{Agent, AgentId, GameMap, MapId, Role, Tier, Tip};
pub use analysis::{
    analyze, composition_tip_key, enemy_signature, map_tip_key, CounterMap, MatchAnalysis,
};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use randomize::{randomize, Composition, COMPOSITION_SIZE};
pub use seed::{AgentRecord, SeedData};
pub use suggest::{score_agent, suggest, Suggestion, DEFAULT_TEAM_SIZE};
