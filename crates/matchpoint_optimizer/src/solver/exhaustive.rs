use tracing::debug;

use crate::utils::combinations::Combinations;

use super::{
    roster::Roster,
    search_context::SearchContext,
    solve_error::SolveError,
    solve_outcome::{SearchCompletion, SolveOutcome},
};

/// Enumerates every size-k subset of the pool in lexicographic order and
/// keeps the first feasible subset with the highest score. Only a strictly
/// greater score replaces the incumbent, so equal-score ties resolve to the
/// earliest subset in enumeration order and repeated runs return the
/// identical roster.
///
/// Cost is `C(n, k)` subsets; callers are expected to have kept `n` small
/// through the min-score filter.
pub(crate) fn search(context: &mut SearchContext) -> Result<SolveOutcome, SolveError> {
    let pool = context.problem.pool();
    let constraint = context.problem.constraint();

    let mut combinations = Combinations::new(pool.len(), constraint.roster_size());
    let mut best: Option<Roster> = None;
    let mut subsets = 0usize;

    while let Some(indices) = combinations.next() {
        if let Some(completion) = context.interruption() {
            debug!("Exhaustive search interrupted after {subsets} subsets");
            return context.interrupted_outcome(best, completion, subsets);
        }

        subsets += 1;

        let roster = Roster::from_indices(pool, indices);
        if !roster.is_feasible(constraint) {
            continue;
        }

        if best
            .as_ref()
            .is_none_or(|incumbent| roster.total_score() > incumbent.total_score())
        {
            context.notify_best(&roster);
            best = Some(roster);
        }
    }

    match best {
        Some(roster) => Ok(SolveOutcome {
            roster,
            completion: SearchCompletion::SearchSpaceExhausted,
            iterations: subsets,
        }),
        None => Err(SolveError::NoFeasibleSolution {
            roster_size: constraint.roster_size(),
            budget: constraint.budget(),
        }),
    }
}
