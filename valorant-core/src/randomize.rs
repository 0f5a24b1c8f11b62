//! Composition randomizer - greedy team construction on top of suggestions

use crate::catalog::Catalog;
use crate::suggest::suggest;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Agents in a full team
pub const COMPOSITION_SIZE: usize = 5;

/// A generated team for a map
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub map: String,
    pub composition: Vec<String>,
}

/// Build a composition for `map`, or for a uniformly chosen map when `None`.
///
/// Each round takes the top suggestion for the current partial team. When no
/// suggestion exists, a random unpicked agent is used instead; when there is
/// none of those either, the composition ends short. Earlier picks are never
/// revisited.
pub fn randomize<R: Rng + ?Sized>(
    catalog: &Catalog,
    map: Option<&str>,
    rng: &mut R,
) -> Composition {
    let map = match map {
        Some(m) => m.to_string(),
        None => catalog
            .list_maps()
            .choose(rng)
            .map(|m| m.name.clone())
            .unwrap_or_default(),
    };

    let mut composition: Vec<String> = Vec::with_capacity(COMPOSITION_SIZE);
    for _ in 0..COMPOSITION_SIZE {
        let pick = suggest(catalog, &map, &composition, COMPOSITION_SIZE)
            .into_iter()
            .next()
            .map(|s| s.agent)
            .or_else(|| pick_any(catalog, &composition, rng));

        match pick {
            Some(agent) => composition.push(agent),
            None => {
                tracing::debug!("Roster exhausted after {} picks on {}", composition.len(), map);
                break;
            }
        }
    }

    Composition { map, composition }
}

/// Uniform choice among agents not yet in `existing`
fn pick_any<R: Rng + ?Sized>(
    catalog: &Catalog,
    existing: &[String],
    rng: &mut R,
) -> Option<String> {
    let options: Vec<&str> = catalog
        .list_agents()
        .iter()
        .filter(|a| !existing.iter().any(|e| a.is_named(e)))
        .map(|a| a.name.as_str())
        .collect();
    options.choose(rng).map(|name| name.to_string())
}
