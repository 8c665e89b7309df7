use serde::Serialize;

/// The selection rules for one optimization run: how many candidates to
/// pick, how much the roster may cost in total, and the score floor applied
/// when the pool is built.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RosterConstraint {
    roster_size: usize,
    budget: u64,
    min_score: u64,
}

impl RosterConstraint {
    pub fn new(roster_size: usize, budget: u64, min_score: u64) -> Self {
        if roster_size == 0 {
            panic!("Roster size must be at least 1.");
        }

        RosterConstraint {
            roster_size,
            budget,
            min_score,
        }
    }

    pub fn roster_size(&self) -> usize {
        self.roster_size
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn min_score(&self) -> u64 {
        self.min_score
    }
}
