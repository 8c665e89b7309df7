use std::{collections::BTreeMap, path::PathBuf};

use clap::Subcommand;
use matchpoint_optimizer::json::types::JsonRosterInstance;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write a random instance file for benchmarking
    Instance {
        #[arg(long, short = 'c', default_value_t = 50)]
        candidates: usize,

        #[arg(long, default_value_t = 2427121)]
        seed: u64,

        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Instance {
            candidates,
            seed,
            out,
        } => {
            let mut rng = SmallRng::seed_from_u64(seed);

            let mut costs = BTreeMap::new();
            let mut scores = BTreeMap::new();
            for index in 0..candidates {
                let name = format!("player-{index:03}");
                costs.insert(name.clone(), rng.random_range(5000..=50000u64));
                scores.insert(name, rng.random_range(10..=100u64));
            }

            let instance = JsonRosterInstance {
                id: Some(format!("generated-{candidates}-{seed}")),
                costs,
                scores,
            };

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, serde_json::to_string_pretty(&instance)?)?;
            info!("Instance with {candidates} candidates written to {out:?}");
        }
    }

    Ok(())
}
