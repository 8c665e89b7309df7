use serde::Serialize;

use super::{
    exhaustive, hill_climb, random_sample, search_context::SearchContext,
    solve_error::SolveError, solve_outcome::SolveOutcome,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Enumerate every size-k subset; proven optimum, exponential in the
    /// pool size.
    Exhaustive,
    /// First-improvement single-swap hill climb from a random feasible
    /// seed; returns a local optimum.
    HillClimb,
    /// Uniform random sampling until a target score or the iteration cap.
    RandomSample,
}

impl SearchStrategy {
    pub(crate) fn search_roster(
        &self,
        context: &mut SearchContext,
    ) -> Result<SolveOutcome, SolveError> {
        match self {
            SearchStrategy::Exhaustive => exhaustive::search(context),
            SearchStrategy::HillClimb => hill_climb::search(context),
            SearchStrategy::RandomSample => random_sample::search(context),
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
            SearchStrategy::HillClimb => write!(f, "hill-climb"),
            SearchStrategy::RandomSample => write!(f, "random-sample"),
        }
    }
}
