use rand::seq::index;
use tracing::debug;

use super::{
    roster::Roster,
    search_context::SearchContext,
    solve_error::SolveError,
    solve_outcome::{SearchCompletion, SolveOutcome},
};

/// First-improvement hill climb over single-candidate swaps.
///
/// Starts from a randomly sampled feasible roster, then scans position by
/// position through every non-member candidate in pool order. The first
/// swap that stays feasible and strictly raises the score is applied and
/// the scan restarts from position 0. A full pass with no improving move
/// means a local optimum, which is the termination condition; the budget is
/// enforced on each candidate roster, never as the loop guard.
pub(crate) fn search(context: &mut SearchContext) -> Result<SolveOutcome, SolveError> {
    let mut current = seed_roster(context)?;
    context.notify_best(&current);

    let pool = context.problem.pool();
    let constraint = context.problem.constraint();

    let mut scans = 0usize;

    'scan: loop {
        if scans >= context.params.max_scans {
            debug!("Hill climb hit the scan cap after {scans} scans");
            return Ok(SolveOutcome {
                roster: current,
                completion: SearchCompletion::ScanBudgetExhausted,
                iterations: scans,
            });
        }

        scans += 1;

        for position in 0..constraint.roster_size() {
            for replacement in pool.indices() {
                if let Some(completion) = context.interruption() {
                    return context.interrupted_outcome(Some(current), completion, scans);
                }

                if current.contains(replacement) {
                    continue;
                }

                let neighbor = current.with_replacement(pool, position, replacement);
                if neighbor.is_feasible(constraint)
                    && neighbor.total_score() > current.total_score()
                {
                    current = neighbor;
                    context.notify_best(&current);
                    continue 'scan;
                }
            }
        }

        debug!(
            "Local optimum after {scans} scans: score = {}",
            current.total_score()
        );

        return Ok(SolveOutcome {
            roster: current,
            completion: SearchCompletion::LocalOptimum,
            iterations: scans,
        });
    }
}

/// Samples uniform random rosters until one fits the budget, bounded by
/// `seed_retries` draws.
fn seed_roster(context: &mut SearchContext) -> Result<Roster, SolveError> {
    let pool = context.problem.pool();
    let constraint = context.problem.constraint();

    for _ in 0..context.params.seed_retries {
        if context.interruption().is_some() {
            return Err(SolveError::Cancelled);
        }

        let members = index::sample(&mut context.rng, pool.len(), constraint.roster_size());
        let roster = Roster::from_indices(pool, &members.into_vec());

        if roster.is_feasible(constraint) {
            return Ok(roster);
        }
    }

    Err(SolveError::NoFeasibleSeed {
        attempts: context.params.seed_retries,
    })
}
