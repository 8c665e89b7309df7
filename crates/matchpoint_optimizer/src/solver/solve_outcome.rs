use serde::Serialize;

use super::roster::Roster;

/// How a search ended. The first three variants are complete terminations;
/// the rest return the best feasible roster found up to the interruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCompletion {
    /// Every size-k subset was enumerated; the roster is a proven optimum.
    SearchSpaceExhausted,
    /// No single feasible swap improves the roster.
    LocalOptimum,
    /// The best-seen score reached the configured target.
    TargetReached,
    /// The sampling iteration cap ran out with no target configured.
    SampleBudgetExhausted,
    /// The hill-climb scan safety cap ran out before converging.
    ScanBudgetExhausted,
    Cancelled,
    DeadlineExpired,
}

impl SearchCompletion {
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            SearchCompletion::SearchSpaceExhausted
                | SearchCompletion::LocalOptimum
                | SearchCompletion::TargetReached
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveOutcome {
    pub roster: Roster,
    pub completion: SearchCompletion,
    /// Strategy-specific progress count: subsets enumerated (exhaustive),
    /// neighborhood scans (hill climb), or samples drawn (sampling).
    pub iterations: usize,
}
