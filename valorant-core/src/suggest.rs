//! Suggestion scoring - rank agents to fill out a partial team

use crate::agents::{Agent, MapId, Role};
use crate::catalog::Catalog;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Team size assumed when the caller does not give one
pub const DEFAULT_TEAM_SIZE: usize = 5;

/// Candidate prefers the target map
const MAP_FIT_BONUS: f64 = 3.0;

/// Candidate brings a role nobody has picked yet
const NEW_ROLE_BONUS: f64 = 2.0;

/// Candidate doubles up on an already-picked role
const STACKED_ROLE_BONUS: f64 = 0.5;

/// Per current pick listed in the candidate's synergies
const SYNERGY_BONUS: f64 = 1.5;

// ============================================================================
// TYPES
// ============================================================================

/// A scored candidate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub agent: String,
    pub score: f64,
}

/// Pick state shared by every candidate in one scoring round
struct PickContext {
    map: Option<MapId>,
    keys: FxHashSet<String>,
    roles: FxHashSet<Role>,
}

impl PickContext {
    fn new<S: AsRef<str>>(catalog: &Catalog, map: &str, picks: &[S]) -> Self {
        let keys: FxHashSet<String> = picks.iter().map(|p| p.as_ref().to_lowercase()).collect();
        let roles = picks
            .iter()
            .filter_map(|p| catalog.find_agent(p.as_ref()))
            .map(|a| a.role)
            .collect();

        Self {
            map: catalog.map_id(map),
            keys,
            roles,
        }
    }

    fn contains(&self, agent: &Agent) -> bool {
        self.keys.contains(agent.key())
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Rank every unpicked agent for `map`, best first.
///
/// Returns at most `team_size - picks.len()` entries and nothing at all when
/// the team is already full. Equal scores keep catalog order.
pub fn suggest<S: AsRef<str>>(
    catalog: &Catalog,
    map: &str,
    picks: &[S],
    team_size: usize,
) -> Vec<Suggestion> {
    let remaining = team_size.saturating_sub(picks.len());
    if remaining == 0 {
        return Vec::new();
    }

    let ctx = PickContext::new(catalog, map, picks);

    let mut scored: Vec<Suggestion> = catalog
        .list_agents()
        .iter()
        .filter(|a| !ctx.contains(a))
        .map(|a| Suggestion {
            agent: a.name.clone(),
            score: score_with(catalog, a, &ctx),
        })
        .collect();

    // Stable sort: ties stay in catalog order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(remaining);
    scored
}

/// Score a single candidate against the current picks.
///
/// An agent that is itself already picked scores negative infinity.
pub fn score_agent<S: AsRef<str>>(catalog: &Catalog, agent: &Agent, map: &str, picks: &[S]) -> f64 {
    score_with(catalog, agent, &PickContext::new(catalog, map, picks))
}

fn score_with(catalog: &Catalog, agent: &Agent, ctx: &PickContext) -> f64 {
    if ctx.contains(agent) {
        return f64::NEG_INFINITY;
    }

    let mut score = 0.0;

    if ctx.map.is_some_and(|m| agent.map_preferences.contains(&m)) {
        score += MAP_FIT_BONUS;
    }

    score += if ctx.roles.contains(&agent.role) {
        STACKED_ROLE_BONUS
    } else {
        NEW_ROLE_BONUS
    };

    let synergy_hits = catalog
        .agents_in(&agent.synergies)
        .filter(|s| ctx.keys.contains(s.key()))
        .count();
    score += synergy_hits as f64 * SYNERGY_BONUS;

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::Tier;
    use crate::seed::{AgentRecord, SeedData};

    fn test_catalog() -> Catalog {
        let seed = SeedData {
            agents: vec![
                AgentRecord::new("Jett", Role::Duelist, Tier::S).with_map_preferences(&["Bind"]),
                AgentRecord::new("Omen", Role::Controller, Tier::A)
                    .with_synergies(&["Jett", "Sova"]),
                AgentRecord::new("Sova", Role::Initiator, Tier::A),
                AgentRecord::new("Raze", Role::Duelist, Tier::A)
                    .with_map_preferences(&["Bind", "Split"]),
                AgentRecord::new("Cypher", Role::Sentinel, Tier::B),
            ],
            maps: vec!["Bind".to_string(), "Split".to_string()],
            ..Default::default()
        };
        Catalog::from_seed(seed).unwrap()
    }

    #[test]
    fn test_full_team_returns_nothing() {
        let catalog = test_catalog();
        assert!(suggest(&catalog, "Bind", &["Jett", "Omen"], 2).is_empty());
        assert!(suggest(&catalog, "Bind", &["Jett", "Omen", "Sova"], 2).is_empty());
        assert!(suggest::<&str>(&catalog, "Bind", &[], 0).is_empty());
    }

    #[test]
    fn test_map_fit_with_empty_team() {
        let catalog = test_catalog();
        let jett = catalog.find_agent("Jett").unwrap();
        assert_eq!(score_agent::<&str>(&catalog, jett, "Bind", &[]), 5.0);
        assert_eq!(score_agent::<&str>(&catalog, jett, "bind", &[]), 5.0);
        assert_eq!(score_agent::<&str>(&catalog, jett, "Split", &[]), 2.0);
    }

    #[test]
    fn test_role_stacking_bonus() {
        let catalog = test_catalog();
        let raze = catalog.find_agent("Raze").unwrap();
        // Duelist already picked: 3 (map) + 0.5 (stacked role)
        assert_eq!(score_agent(&catalog, raze, "Bind", &["Jett"]), 3.5);
    }

    #[test]
    fn test_synergy_is_additive() {
        let catalog = test_catalog();
        let omen = catalog.find_agent("Omen").unwrap();
        // 0 (map) + 2 (new role) + 2 * 1.5 (synergy)
        assert_eq!(score_agent(&catalog, omen, "Bind", &["jett", "SOVA"]), 5.0);
        assert_eq!(score_agent(&catalog, omen, "Bind", &["Jett"]), 3.5);
    }

    #[test]
    fn test_picked_agent_scores_negative_infinity() {
        let catalog = test_catalog();
        let jett = catalog.find_agent("Jett").unwrap();
        assert_eq!(score_agent(&catalog, jett, "Bind", &["JETT"]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_picks_never_suggested() {
        let catalog = test_catalog();
        let suggestions = suggest(&catalog, "Bind", &["jett", "Omen"], 10);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions
            .iter()
            .all(|s| !s.agent.eq_ignore_ascii_case("jett") && s.agent != "Omen"));
    }

    #[test]
    fn test_ranking_and_truncation() {
        let catalog = test_catalog();
        let suggestions = suggest(&catalog, "Bind", &["Jett"], 3);
        // Omen 3.5, Sova 2.0, Raze 3.5, Cypher 2.0
        let names: Vec<_> = suggestions.iter().map(|s| s.agent.as_str()).collect();
        assert_eq!(names, vec!["Omen", "Raze"]);
        assert_eq!(suggestions[0].score, 3.5);
        assert_eq!(suggestions[1].score, 3.5);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = test_catalog();
        let suggestions = suggest::<&str>(&catalog, "Haven", &[], 5);
        let names: Vec<_> = suggestions.iter().map(|s| s.agent.as_str()).collect();
        assert_eq!(names, vec!["Jett", "Omen", "Sova", "Raze", "Cypher"]);
        assert!(suggestions.iter().all(|s| s.score == 2.0));
    }

    #[test]
    fn test_unknown_picks_do_not_count_as_roles() {
        let catalog = test_catalog();
        let suggestions = suggest(&catalog, "Split", &["Nobody"], 2);
        assert_eq!(suggestions[0].agent, "Raze");
        assert_eq!(suggestions[0].score, 5.0);
    }
}
