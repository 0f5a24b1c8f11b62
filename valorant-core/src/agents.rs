//! Agent, map and tip definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent identifier (index into the catalog's agent arena)
pub type AgentId = usize;

/// Map identifier (index into the catalog's map arena)
pub type MapId = usize;

/// Agent role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Duelist,
    Controller,
    Sentinel,
    Initiator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Duelist => "Duelist",
            Role::Controller => "Controller",
            Role::Sentinel => "Sentinel",
            Role::Initiator => "Initiator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Meta tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
        };
        f.pad(s)
    }
}

/// Agent with resolved relationships.
///
/// Relationships are directed and hold arena indices; they are not required to be
/// symmetric (A countering B says nothing about B's `weak_against`).
#[derive(Clone, Debug)]
pub struct Agent {
    pub name: String,
    pub role: Role,
    pub tier: Tier,
    /// Agents this agent beats
    pub counters: Vec<AgentId>,
    /// Agents that beat this agent (kept for data fidelity, not scored)
    pub weak_against: Vec<AgentId>,
    /// Maps this agent is strong on
    pub map_preferences: Vec<MapId>,
    /// Agents that pair well with this agent
    pub synergies: Vec<AgentId>,
    key: String,
}

impl Agent {
    pub(crate) fn new(name: &str, role: Role, tier: Tier) -> Self {
        Self {
            name: name.to_string(),
            role,
            tier,
            counters: Vec::new(),
            weak_against: Vec::new(),
            map_preferences: Vec::new(),
            synergies: Vec::new(),
            key: name.to_lowercase(),
        }
    }

    /// Lowercased name used for case-insensitive comparisons
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.key == name.to_lowercase()
    }
}

/// A playable map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMap {
    pub name: String,
    key: String,
}

impl GameMap {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            key: name.to_lowercase(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Pre-authored tip, keyed `map:<map>` or `vs:<enemy signature>`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub key: String,
    pub content: String,
}
