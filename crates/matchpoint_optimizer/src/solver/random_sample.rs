use rand::seq::index;
use tracing::debug;

use super::{
    roster::Roster,
    search_context::SearchContext,
    solve_error::SolveError,
    solve_outcome::{SearchCompletion, SolveOutcome},
};

/// Draws uniform random size-k rosters (sampling without replacement
/// within each draw) and keeps the best feasible one. Succeeds as soon as
/// the best-seen score reaches the target; the iteration cap is always
/// enforced, so a target that is never reached surfaces as
/// `ThresholdUnreached` instead of looping forever.
pub(crate) fn search(context: &mut SearchContext) -> Result<SolveOutcome, SolveError> {
    let pool = context.problem.pool();
    let constraint = context.problem.constraint();

    let target_score = context.params.target_score;
    let max_iterations = context.params.max_iterations;

    let mut best: Option<Roster> = None;
    let mut draws = 0usize;

    while draws < max_iterations {
        if let Some(completion) = context.interruption() {
            debug!("Sampling interrupted after {draws} draws");
            return context.interrupted_outcome(best, completion, draws);
        }

        draws += 1;

        let members = index::sample(&mut context.rng, pool.len(), constraint.roster_size());
        let roster = Roster::from_indices(pool, &members.into_vec());

        if !roster.is_feasible(constraint) {
            continue;
        }

        if best
            .as_ref()
            .is_none_or(|incumbent| roster.total_score() > incumbent.total_score())
        {
            context.notify_best(&roster);

            if target_score.is_some_and(|target| roster.total_score() >= target) {
                return Ok(SolveOutcome {
                    roster,
                    completion: SearchCompletion::TargetReached,
                    iterations: draws,
                });
            }

            best = Some(roster);
        }
    }

    match (best, target_score) {
        (Some(best), Some(target)) => Err(SolveError::ThresholdUnreached {
            target,
            iterations: draws,
            best: Some(best),
        }),
        (Some(best), None) => Ok(SolveOutcome {
            roster: best,
            completion: SearchCompletion::SampleBudgetExhausted,
            iterations: draws,
        }),
        (None, Some(target)) if max_iterations == 0 => Err(SolveError::ThresholdUnreached {
            target,
            iterations: 0,
            best: None,
        }),
        (None, _) => Err(SolveError::NoFeasibleSolution {
            roster_size: constraint.roster_size(),
            budget: constraint.budget(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        solver::{
            search_strategy::SearchStrategy,
            solve_error::SolveError,
            solve_outcome::SearchCompletion,
            solver::Solver,
            solver_params::SolverParams,
        },
        test_utils,
    };

    fn params() -> SolverParams {
        SolverParams {
            strategy: SearchStrategy::RandomSample,
            max_iterations: 2000,
            ..SolverParams::default()
        }
    }

    #[test]
    fn test_stops_as_soon_as_target_is_reached() {
        let problem = test_utils::problem(
            &[
                ("player-a", 30000, 60),
                ("player-b", 40000, 70),
                ("player-c", 20000, 50),
                ("player-d", 10000, 20),
            ],
            2,
            60000,
        );

        let outcome = Solver::new(
            problem.clone(),
            SolverParams {
                target_score: Some(100),
                ..params()
            },
        )
        .solve()
        .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::TargetReached);
        assert!(outcome.roster.total_score() >= 100);
        assert!(outcome.iterations <= 2000);
        test_utils::assert_valid_roster(&problem, &outcome.roster);
    }

    #[test]
    fn test_threshold_unreached_carries_best_found() {
        let problem = test_utils::problem(
            &[
                ("player-a", 30000, 60),
                ("player-b", 40000, 70),
                ("player-c", 20000, 50),
            ],
            2,
            60000,
        );

        // Best reachable score is 120; a target of 500 can never be met.
        let result = Solver::new(
            problem,
            SolverParams {
                target_score: Some(500),
                max_iterations: 50,
                ..params()
            },
        )
        .solve();

        match result {
            Err(SolveError::ThresholdUnreached {
                target: 500,
                iterations: 50,
                best: Some(best),
            }) => assert!(best.total_score() <= 120),
            other => panic!("expected ThresholdUnreached with a best roster, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_iteration_cap_fails_immediately() {
        let problem = test_utils::problem(
            &[("player-a", 30000, 60), ("player-b", 20000, 50)],
            1,
            60000,
        );

        let result = Solver::new(
            problem,
            SolverParams {
                target_score: Some(10),
                max_iterations: 0,
                ..params()
            },
        )
        .solve();

        assert!(matches!(
            result,
            Err(SolveError::ThresholdUnreached {
                iterations: 0,
                best: None,
                ..
            })
        ));
    }

    #[test]
    fn test_without_target_the_full_budget_is_spent() {
        let problem = test_utils::arbitrary_problem(15, 3, 120000, 5);

        let outcome = Solver::new(problem.clone(), params()).solve().unwrap();

        assert_eq!(outcome.completion, SearchCompletion::SampleBudgetExhausted);
        assert_eq!(outcome.iterations, 2000);
        test_utils::assert_valid_roster(&problem, &outcome.roster);
    }

    #[test]
    fn test_reproducible_under_fixed_seed() {
        let problem = test_utils::arbitrary_problem(20, 4, 150000, 23);

        let run = |seed: u64| {
            Solver::new(
                problem.clone(),
                SolverParams {
                    rng_seed: seed,
                    ..params()
                },
            )
            .solve()
            .unwrap()
        };

        let first = run(42);
        let second = run(42);

        assert_eq!(first.roster, second.roster);
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_budget_too_tight_for_any_sample() {
        let problem = test_utils::problem(
            &[("player-a", 30000, 60), ("player-b", 40000, 70)],
            2,
            60000,
        );

        let result = Solver::new(problem, params()).solve();

        assert!(matches!(
            result,
            Err(SolveError::NoFeasibleSolution {
                roster_size: 2,
                budget: 60000,
            })
        ));
    }
}
