use crate::solver::solve_error::SolveError;

use super::{candidate_pool::CandidatePool, roster_constraint::RosterConstraint};

/// Immutable snapshot of one optimization instance: the filtered candidate
/// pool plus the selection rules. Every solver is a pure function of this
/// snapshot and its RNG seed, so independent solves never coordinate.
#[derive(Debug, Clone)]
pub struct RosterProblem {
    pool: CandidatePool,
    constraint: RosterConstraint,
}

impl RosterProblem {
    pub fn new(pool: CandidatePool, constraint: RosterConstraint) -> Result<Self, SolveError> {
        if pool.len() < constraint.roster_size() {
            return Err(SolveError::InsufficientCandidates {
                available: pool.len(),
                required: constraint.roster_size(),
            });
        }

        Ok(RosterProblem { pool, constraint })
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn constraint(&self) -> &RosterConstraint {
        &self.constraint
    }
}
