use jiff::SignedDuration;

use super::search_strategy::SearchStrategy;

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub strategy: SearchStrategy,

    /// Score at which the sampling search declares success. `None` means
    /// the sampler runs its full iteration budget and keeps the best.
    pub target_score: Option<u64>,

    /// Hard cap on sampling iterations. Always enforced: the sampler never
    /// loops "until threshold met" without a bound.
    pub max_iterations: usize,

    /// How many random draws the hill climb may spend looking for a
    /// feasible starting roster.
    pub seed_retries: usize,

    /// Safety bound on full neighborhood scans. Each accepted move restarts
    /// the scan, so this only triggers on pathological inputs.
    pub max_scans: usize,

    pub rng_seed: u64,

    /// Optional wall-clock deadline, checked at every enumeration or
    /// sampling step alongside the cooperative stop flag.
    pub timeout: Option<SignedDuration>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::HillClimb,
            target_score: None,
            max_iterations: 100000,
            seed_retries: 1000,
            max_scans: 10000,
            rng_seed: 2427121,
            timeout: None,
        }
    }
}
