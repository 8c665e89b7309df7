use thiserror::Error;

use super::roster::Roster;

#[derive(Error, Debug, Clone)]
pub enum SolveError {
    /// The filtered pool cannot fill a roster. Raised when the problem is
    /// built, before any solver runs.
    #[error("pool has {available} candidates after filtering, roster needs {required}")]
    InsufficientCandidates { available: usize, required: usize },

    #[error("no roster of size {roster_size} fits within budget {budget}")]
    NoFeasibleSolution { roster_size: usize, budget: u64 },

    #[error("no feasible seed roster found after {attempts} random draws")]
    NoFeasibleSeed { attempts: usize },

    /// The sampling budget ran out before the target score was reached.
    /// The best feasible roster seen so far (if any) is attached so the
    /// caller can accept it or retry with a relaxed target.
    #[error("target score {target} not reached after {iterations} samples")]
    ThresholdUnreached {
        target: u64,
        iterations: usize,
        best: Option<Roster>,
    },

    /// The search was stopped before any feasible roster was found. A stop
    /// after a feasible roster was seen is not an error: the solver returns
    /// the best-so-far tagged as incomplete instead.
    #[error("search cancelled before a feasible roster was found")]
    Cancelled,
}
