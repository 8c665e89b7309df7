use serde::Serialize;

use crate::{
    problem::roster_problem::RosterProblem,
    solver::solve_outcome::{SearchCompletion, SolveOutcome},
};

/// The winning roster resolved back to names, with the per-candidate
/// cost/score breakdown kept for audit. Entries are listed in pool order
/// (sorted by name).
#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub entries: Vec<RosterReportEntry>,
    pub total_cost: u64,
    pub total_score: u64,
    pub completion: SearchCompletion,
    pub iterations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReportEntry {
    pub name: String,
    pub cost: u64,
    pub score: u64,
}

impl RosterReport {
    pub fn new(problem: &RosterProblem, outcome: &SolveOutcome) -> Self {
        let entries = outcome
            .roster
            .members()
            .iter()
            .map(|&index| {
                let candidate = problem.pool().candidate(index);
                RosterReportEntry {
                    name: candidate.name().to_string(),
                    cost: candidate.cost(),
                    score: candidate.score(),
                }
            })
            .collect();

        RosterReport {
            entries,
            total_cost: outcome.roster.total_cost(),
            total_score: outcome.roster.total_score(),
            completion: outcome.completion,
            iterations: outcome.iterations,
        }
    }
}

impl std::fmt::Display for RosterReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .entries
            .iter()
            .map(|entry| entry.name.len())
            .max()
            .unwrap_or(0)
            .max("total".len());

        for entry in &self.entries {
            writeln!(
                f,
                "{:<name_width$}  cost = {:>8}  score = {:>5}",
                entry.name, entry.cost, entry.score
            )?;
        }

        write!(
            f,
            "{:<name_width$}  cost = {:>8}  score = {:>5}",
            "total", self.total_cost, self.total_score
        )
    }
}
