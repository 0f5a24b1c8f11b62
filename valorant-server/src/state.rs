//! Server state
//!
//! The catalog is immutable and shared freely. Randomizer requests draw a
//! fresh RNG each, unless a fixed seed was configured.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use valorant_core::{randomize, Catalog, Composition};

/// Server-wide shared state
pub struct ServerState {
    pub catalog: Catalog,
    seeded_rng: Option<Mutex<ChaCha8Rng>>,
}

impl ServerState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            seeded_rng: None,
        }
    }

    /// State with a fixed RNG seed, for reproducible randomizer output.
    /// Requests share one generator and are serialized on it.
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            seeded_rng: Some(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded_rng.is_some()
    }

    /// Run the randomizer with this state's RNG policy
    pub(crate) fn randomize(&self, map: Option<&str>) -> Composition {
        match &self.seeded_rng {
            Some(rng) => {
                // A poisoned RNG is still a usable RNG
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                randomize(&self.catalog, map, &mut *rng)
            }
            None => randomize(&self.catalog, map, &mut ChaCha8Rng::from_entropy()),
        }
    }
}
