//! Match analysis - counter picks and tips for a known enemy roster

use crate::catalog::Catalog;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// Result of analysing a matchup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    /// Ally name -> enemies it counters. An empty list means the ally was
    /// found but has no direct counter on the enemy side.
    pub counters: CounterMap,
    /// Map tips followed by enemy-composition tips
    pub tips: Vec<String>,
}

/// Ally -> countered enemies, kept in the order allies were given.
///
/// Serializes as a JSON object whose keys follow that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CounterMap {
    entries: Vec<(String, Vec<String>)>,
}

impl CounterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced ally keeps its original position
    pub fn insert(&mut self, ally: String, beaten: Vec<String>) {
        match self.entries.iter_mut().find(|(name, _)| *name == ally) {
            Some(entry) => entry.1 = beaten,
            None => self.entries.push((ally, beaten)),
        }
    }

    pub fn get(&self, ally: &str) -> Option<&Vec<String>> {
        self.entries.iter().find(|(name, _)| name == ally).map(|(_, beaten)| beaten)
    }

    pub fn contains_key(&self, ally: &str) -> bool {
        self.get(ally).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter().map(|(name, beaten)| (name, beaten))
    }
}

impl Index<&str> for CounterMap {
    type Output = Vec<String>;

    fn index(&self, ally: &str) -> &Vec<String> {
        match self.get(ally) {
            Some(beaten) => beaten,
            None => panic!("no counter entry for {}", ally),
        }
    }
}

impl FromIterator<(String, Vec<String>)> for CounterMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut map = CounterMap::new();
        for (ally, beaten) in iter {
            map.insert(ally, beaten);
        }
        map
    }
}

impl Serialize for CounterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ally, beaten) in &self.entries {
            map.serialize_entry(ally, beaten)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CounterMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CounterMapVisitor;

        impl<'de> Visitor<'de> for CounterMapVisitor {
            type Value = CounterMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of ally names to countered enemy names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<CounterMap, A::Error> {
                let mut map = CounterMap::new();
                while let Some((ally, beaten)) = access.next_entry::<String, Vec<String>>()? {
                    map.insert(ally, beaten);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(CounterMapVisitor)
    }
}

/// Canonical, order-independent key for an enemy roster: lowercased names,
/// sorted, joined with `+`.
pub fn enemy_signature<S: AsRef<str>>(enemies: &[S]) -> String {
    let mut names: Vec<String> = enemies.iter().map(|e| e.as_ref().to_lowercase()).collect();
    names.sort();
    names.join("+")
}

/// Tip key for a map
pub fn map_tip_key(map: &str) -> String {
    format!("map:{}", map.to_lowercase())
}

/// Tip key for an enemy composition
pub fn composition_tip_key<S: AsRef<str>>(enemies: &[S]) -> String {
    format!("vs:{}", enemy_signature(enemies))
}

/// Analyse a matchup on `map`.
///
/// Unknown ally names are skipped. Each resolved ally gets the subset of its
/// counters present among `enemies`, compared case-insensitively.
pub fn analyze<S: AsRef<str>, T: AsRef<str>>(
    catalog: &Catalog,
    map: &str,
    team: &[S],
    enemies: &[T],
) -> MatchAnalysis {
    let enemy_keys: Vec<String> = enemies.iter().map(|e| e.as_ref().to_lowercase()).collect();

    let mut counters = CounterMap::new();
    if !enemy_keys.is_empty() {
        for ally in team {
            let Some(agent) = catalog.find_agent(ally.as_ref()) else {
                continue;
            };
            let beaten: Vec<String> = catalog
                .agents_in(&agent.counters)
                .filter(|c| enemy_keys.iter().any(|k| k == c.key()))
                .map(|c| c.name.clone())
                .collect();
            counters.insert(agent.name.clone(), beaten);
        }
    }

    let tips = catalog
        .find_tips(&map_tip_key(map))
        .into_iter()
        .chain(catalog.find_tips(&composition_tip_key(enemies)))
        .map(|t| t.content.clone())
        .collect();

    MatchAnalysis { counters, tips }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{Role, Tier};
    use crate::seed::{AgentRecord, SeedData};

    fn test_catalog(jett_counters: &[&str]) -> Catalog {
        let mut seed = SeedData {
            agents: vec![
                AgentRecord::new("Jett", Role::Duelist, Tier::S).with_counters(jett_counters),
                AgentRecord::new("Sage", Role::Sentinel, Tier::A).with_counters(&["Raze", "Jett"]),
                AgentRecord::new("Cypher", Role::Sentinel, Tier::A),
                AgentRecord::new("Raze", Role::Duelist, Tier::A),
            ],
            maps: vec!["Bind".to_string()],
            ..Default::default()
        };
        seed.tips.insert("map:bind".to_string(), vec!["Use teleporters".to_string()]);
        seed.tips.insert(
            "vs:cypher+raze".to_string(),
            vec!["Clear trips early".to_string(), "Respect satchels".to_string()],
        );
        Catalog::from_seed(seed).unwrap()
    }

    #[test]
    fn test_signature_order_independent() {
        assert_eq!(enemy_signature(&["Jett", "Sage"]), enemy_signature(&["Sage", "Jett"]));
        assert_eq!(enemy_signature(&["Sage", "JETT"]), "jett+sage");
        assert_eq!(enemy_signature::<&str>(&[]), "");
    }

    #[test]
    fn test_counter_found() {
        let catalog = test_catalog(&["Cypher"]);
        let result = analyze(&catalog, "Bind", &["Jett"], &["Cypher"]);
        assert_eq!(result.counters.len(), 1);
        assert_eq!(result.counters["Jett"], vec!["Cypher"]);
    }

    #[test]
    fn test_no_counter_is_explicit_empty() {
        let catalog = test_catalog(&["Raze"]);
        let result = analyze(&catalog, "Bind", &["Jett"], &["Cypher"]);
        assert_eq!(result.counters.get("Jett"), Some(&Vec::new()));
    }

    #[test]
    fn test_unknown_ally_skipped() {
        let catalog = test_catalog(&["Cypher"]);
        let result = analyze(&catalog, "Bind", &["Nobody", "Jett"], &["Cypher"]);
        assert_eq!(result.counters.len(), 1);
        assert!(result.counters.contains_key("Jett"));
    }

    #[test]
    fn test_empty_rosters_have_no_counters() {
        let catalog = test_catalog(&["Cypher"]);
        let no_team = analyze::<&str, &str>(&catalog, "Bind", &[], &["Cypher"]);
        assert!(no_team.counters.is_empty());
        assert_eq!(no_team.tips, vec!["Use teleporters"]);

        let no_enemies = analyze::<&str, &str>(&catalog, "Bind", &["Jett"], &[]);
        assert!(no_enemies.counters.is_empty());
        assert_eq!(no_enemies.tips, vec!["Use teleporters"]);
    }

    #[test]
    fn test_case_insensitive_inputs() {
        let catalog = test_catalog(&["Cypher"]);
        let lower = analyze(&catalog, "BIND", &["jett"], &["CYPHER"]);
        let canonical = analyze(&catalog, "Bind", &["Jett"], &["Cypher"]);
        assert_eq!(lower, canonical);
    }

    #[test]
    fn test_tips_map_first_then_composition() {
        let catalog = test_catalog(&["Cypher"]);
        let result = analyze(&catalog, "bind", &["Sage"], &["Raze", "Cypher"]);
        assert_eq!(
            result.tips,
            vec!["Use teleporters", "Clear trips early", "Respect satchels"]
        );
        assert_eq!(result.counters["Sage"], vec!["Raze"]);

        // Same roster in a different order hits the same composition tips
        let reordered = analyze(&catalog, "bind", &["Sage"], &["cypher", "RAZE"]);
        assert_eq!(reordered.tips, result.tips);
    }

    #[test]
    fn test_counters_keep_team_order() {
        let catalog = test_catalog(&["Cypher"]);
        let result = analyze(&catalog, "Bind", &["sage", "Jett", "Nobody"], &["Cypher", "Raze"]);
        let allies: Vec<_> = result.counters.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(allies, vec!["Sage", "Jett"]);

        let json = serde_json::to_string(&result.counters).unwrap();
        assert_eq!(json, r#"{"Sage":["Raze"],"Jett":["Cypher"]}"#);

        let back: CounterMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result.counters);
    }

    #[test]
    fn test_repeated_ally_keeps_first_position() {
        let catalog = test_catalog(&["Cypher"]);
        let result = analyze(&catalog, "Bind", &["Jett", "Sage", "JETT"], &["Cypher"]);
        let allies: Vec<_> = result.counters.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(allies, vec!["Jett", "Sage"]);
    }

    #[test]
    fn test_unknown_map_has_no_map_tips() {
        let catalog = test_catalog(&["Cypher"]);
        let result = analyze(&catalog, "Atlantis", &["Jett"], &["Cypher"]);
        assert!(result.tips.is_empty());
    }
}
