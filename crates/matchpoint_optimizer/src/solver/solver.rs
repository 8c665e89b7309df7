use std::sync::{Arc, atomic::AtomicBool};

use jiff::Timestamp;
use parking_lot::{Mutex, RwLock};
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;
use tracing::debug;

use crate::problem::roster_problem::RosterProblem;

use super::{
    roster::Roster,
    search_context::{BestRosterHandler, SearchContext},
    solve_error::SolveError,
    solve_outcome::SolveOutcome,
    solver_params::SolverParams,
};

#[derive(Copy, Clone, Debug, Serialize)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
}

/// Owns one problem snapshot and drives the configured search strategy
/// over it. `solve` is deterministic for a given seed and can be re-run;
/// `stop` may be called from another thread and is honored at the next
/// enumeration or sampling step.
pub struct Solver {
    problem: RosterProblem,
    params: SolverParams,
    status: RwLock<SolverStatus>,
    is_stopped: Arc<AtomicBool>,
    on_best_roster_handler: Option<BestRosterHandler>,
    created_at: Timestamp,
}

impl Solver {
    pub fn new(problem: RosterProblem, params: SolverParams) -> Self {
        Solver {
            problem,
            params,
            status: RwLock::new(SolverStatus::Pending),
            is_stopped: Arc::new(AtomicBool::new(false)),
            on_best_roster_handler: None,
            created_at: Timestamp::now(),
        }
    }

    /// Registers a callback invoked on every strict improvement of the
    /// best feasible roster, in any strategy.
    pub fn on_best_roster<F>(&mut self, callback: F)
    where
        F: FnMut(&Roster) + Send + Sync + 'static,
    {
        self.on_best_roster_handler = Some(Arc::new(Mutex::new(callback)));
    }

    pub fn solve(&self) -> Result<SolveOutcome, SolveError> {
        self.is_stopped
            .store(false, std::sync::atomic::Ordering::Relaxed);
        *self.status.write() = SolverStatus::Running;

        let rng = SmallRng::seed_from_u64(self.params.rng_seed);
        let mut context = SearchContext::new(
            &self.problem,
            &self.params,
            rng,
            &self.is_stopped,
            self.on_best_roster_handler.clone(),
        );

        let result = self.params.strategy.search_roster(&mut context);
        *self.status.write() = SolverStatus::Completed;

        match &result {
            Ok(outcome) => debug!(
                "Solve finished: strategy = {}, score = {}, cost = {}, completion = {:?}",
                self.params.strategy,
                outcome.roster.total_score(),
                outcome.roster.total_cost(),
                outcome.completion,
            ),
            Err(error) => debug!(
                "Solve failed: strategy = {}, error = {error}",
                self.params.strategy
            ),
        }

        result
    }

    pub fn stop(&self) {
        self.is_stopped
            .store(true, std::sync::atomic::Ordering::Relaxed);
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn problem(&self) -> &RosterProblem {
        &self.problem
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use crate::{
        solver::{
            search_strategy::SearchStrategy,
            solve_error::SolveError,
            solve_outcome::SearchCompletion,
            solver::{Solver, SolverStatus},
            solver_params::SolverParams,
        },
        test_utils,
    };

    #[test]
    fn test_stop_before_solve_has_no_effect() {
        let problem = test_utils::arbitrary_problem(18, 3, 150000, 3);

        let solver = Solver::new(
            problem,
            SolverParams {
                strategy: SearchStrategy::Exhaustive,
                ..SolverParams::default()
            },
        );

        // solve() rearms the stop flag, so a stale stop from a previous
        // run never leaks into the next one.
        solver.stop();
        let outcome = solver.solve().unwrap();
        assert_eq!(outcome.completion, SearchCompletion::SearchSpaceExhausted);
    }

    #[test]
    fn test_stop_mid_search_returns_best_so_far() {
        // C(30, 15) is ~155M subsets, far more than the wait below.
        // Everything is feasible, so a best-so-far exists almost at once.
        let problem = test_utils::arbitrary_problem(30, 15, u64::MAX, 5);

        let solver = Solver::new(
            problem,
            SolverParams {
                strategy: SearchStrategy::Exhaustive,
                ..SolverParams::default()
            },
        );

        let outcome = std::thread::scope(|scope| {
            let handle = scope.spawn(|| solver.solve());

            // solve() rearms the stop flag before flipping the status to
            // Running, so a stop issued after that is never lost.
            while !matches!(solver.status(), SolverStatus::Running) {
                std::thread::yield_now();
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
            solver.stop();

            handle.join().unwrap()
        })
        .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::Cancelled);
        assert!(!outcome.completion.is_complete());
        test_utils::assert_valid_roster(solver.problem(), &outcome.roster);
    }

    #[test]
    fn test_improvement_callback_sees_monotonic_scores() {
        let problem = test_utils::arbitrary_problem(12, 3, 120000, 29);

        let best_seen = Arc::new(AtomicUsize::new(0));
        let callback_best = Arc::clone(&best_seen);

        let mut solver = Solver::new(
            problem,
            SolverParams {
                strategy: SearchStrategy::Exhaustive,
                ..SolverParams::default()
            },
        );
        solver.on_best_roster(move |roster| {
            let previous = callback_best.swap(roster.total_score() as usize, Ordering::Relaxed);
            assert!(roster.total_score() as usize > previous);
        });

        let outcome = solver.solve().unwrap();

        assert_eq!(
            best_seen.load(Ordering::Relaxed),
            outcome.roster.total_score() as usize
        );
    }

    #[test]
    fn test_deadline_is_honored() {
        let problem = test_utils::arbitrary_problem(26, 13, u64::MAX, 17);

        // An already-expired deadline stops the search at the very first
        // step, before any feasible roster is seen.
        let solver = Solver::new(
            problem,
            SolverParams {
                strategy: SearchStrategy::Exhaustive,
                timeout: Some(jiff::SignedDuration::from_secs(-1)),
                ..SolverParams::default()
            },
        );

        let result = solver.solve();

        assert!(matches!(result, Err(SolveError::Cancelled)));
    }
}
