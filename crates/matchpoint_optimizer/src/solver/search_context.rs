use std::sync::{Arc, atomic::AtomicBool};

use jiff::Timestamp;
use parking_lot::Mutex;
use rand::rngs::SmallRng;

use crate::problem::roster_problem::RosterProblem;

use super::{
    roster::Roster,
    solve_error::SolveError,
    solve_outcome::{SearchCompletion, SolveOutcome},
    solver_params::SolverParams,
};

pub(crate) type BestRosterHandler = Arc<Mutex<dyn FnMut(&Roster) + Send + Sync + 'static>>;

/// Per-solve state shared by the three strategies: the problem snapshot,
/// the RNG, the cooperative stop flag and deadline, and the improvement
/// callback.
pub(crate) struct SearchContext<'a> {
    pub problem: &'a RosterProblem,
    pub params: &'a SolverParams,
    pub rng: SmallRng,
    started_at: Timestamp,
    is_stopped: &'a AtomicBool,
    on_best_roster: Option<BestRosterHandler>,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        problem: &'a RosterProblem,
        params: &'a SolverParams,
        rng: SmallRng,
        is_stopped: &'a AtomicBool,
        on_best_roster: Option<BestRosterHandler>,
    ) -> Self {
        SearchContext {
            problem,
            params,
            rng,
            started_at: Timestamp::now(),
            is_stopped,
            on_best_roster,
        }
    }

    /// Checked at every enumeration/sampling step. The stop flag wins over
    /// the deadline when both have triggered.
    pub fn interruption(&self) -> Option<SearchCompletion> {
        if self.is_stopped.load(std::sync::atomic::Ordering::Relaxed) {
            return Some(SearchCompletion::Cancelled);
        }

        if let Some(timeout) = self.params.timeout
            && Timestamp::now().duration_since(self.started_at) > timeout
        {
            return Some(SearchCompletion::DeadlineExpired);
        }

        None
    }

    pub fn notify_best(&self, roster: &Roster) {
        if let Some(handler) = &self.on_best_roster {
            handler.lock()(roster);
        }
    }

    /// Wraps up an interrupted search: the best-so-far is returned tagged
    /// as incomplete, never a partial roster. With nothing feasible found
    /// yet, the interruption surfaces as a `Cancelled` error.
    pub fn interrupted_outcome(
        &self,
        best: Option<Roster>,
        completion: SearchCompletion,
        iterations: usize,
    ) -> Result<SolveOutcome, SolveError> {
        match best {
            Some(roster) => Ok(SolveOutcome {
                roster,
                completion,
                iterations,
            }),
            None => Err(SolveError::Cancelled),
        }
    }
}
