//! Randomize command - generate a full composition

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use valorant_core::{randomize, Catalog};

#[derive(Args)]
pub struct RandomizeArgs {
    /// Map to build for (random when omitted)
    #[arg(long)]
    pub map: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RandomizeArgs, catalog: &Catalog) -> Result<()> {
    let mut rng = create_rng(args.seed);
    let result = randomize(catalog, args.map.as_deref(), &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Map: {}", result.map);
        for agent in &result.composition {
            println!("  {}", agent);
        }
    }
    Ok(())
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
