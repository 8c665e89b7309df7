use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    problem::{
        registry::CandidateRegistry, roster_constraint::RosterConstraint,
        roster_problem::RosterProblem,
    },
    solver::roster::Roster,
};

pub(crate) fn registry(entries: &[(&str, u64, u64)]) -> CandidateRegistry {
    let mut registry = CandidateRegistry::new();
    for &(name, cost, score) in entries {
        registry.insert_cost(name, cost);
        registry.insert_score(name, score);
    }
    registry
}

pub(crate) fn pool(entries: &[(&str, u64, u64)]) -> crate::problem::candidate_pool::CandidatePool {
    registry(entries).build_pool(0)
}

pub(crate) fn problem(
    entries: &[(&str, u64, u64)],
    roster_size: usize,
    budget: u64,
) -> RosterProblem {
    RosterProblem::new(pool(entries), RosterConstraint::new(roster_size, budget, 0)).unwrap()
}

/// A seeded random instance: costs in 5000..=50000, scores in 10..=100.
pub(crate) fn arbitrary_problem(
    candidates: usize,
    roster_size: usize,
    budget: u64,
    seed: u64,
) -> RosterProblem {
    let mut rng = SmallRng::seed_from_u64(seed);

    let entries = (0..candidates)
        .map(|index| {
            (
                format!("player-{index:03}"),
                rng.random_range(5000..=50000u64),
                rng.random_range(10..=100u64),
            )
        })
        .collect::<Vec<_>>();

    let mut registry = CandidateRegistry::new();
    for (name, cost, score) in entries {
        registry.insert_cost(name.clone(), cost);
        registry.insert_score(name, score);
    }

    RosterProblem::new(
        registry.build_pool(0),
        RosterConstraint::new(roster_size, budget, 0),
    )
    .unwrap()
}

pub(crate) fn names(problem: &RosterProblem, roster: &Roster) -> Vec<String> {
    roster
        .members()
        .iter()
        .map(|&index| problem.pool().candidate(index).name().to_string())
        .collect()
}

pub(crate) fn assert_valid_roster(problem: &RosterProblem, roster: &Roster) {
    let constraint = problem.constraint();

    assert_eq!(roster.len(), constraint.roster_size());
    assert!(
        roster
            .members()
            .windows(2)
            .all(|pair| pair[0] < pair[1]),
        "roster members must be distinct and sorted"
    );
    assert!(
        roster.members().iter().all(|index| index.get() < problem.pool().len()),
        "roster members must come from the pool"
    );
    assert!(roster.total_cost() <= constraint.budget());
}

/// Independent optimality check: bitmask enumeration of every subset,
/// deliberately different from the solver's combination cursor. Only
/// usable for pools of up to ~20 candidates.
pub(crate) fn brute_force_best_score(problem: &RosterProblem) -> Option<u64> {
    let pool = problem.pool();
    let constraint = problem.constraint();
    assert!(pool.len() <= 20, "brute force check is exponential");

    let mut best: Option<u64> = None;

    for mask in 0u32..(1 << pool.len()) {
        if mask.count_ones() as usize != constraint.roster_size() {
            continue;
        }

        let (cost, score) = pool
            .candidates()
            .iter()
            .enumerate()
            .filter(|&(index, _)| mask & (1 << index) != 0)
            .fold((0, 0), |(cost, score), (_, candidate)| {
                (cost + candidate.cost(), score + candidate.score())
            });

        if cost <= constraint.budget() && best.is_none_or(|b| score > b) {
            best = Some(score);
        }
    }

    best
}
