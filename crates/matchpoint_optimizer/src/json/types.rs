use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    problem::{
        registry::CandidateRegistry, roster_constraint::RosterConstraint,
        roster_problem::RosterProblem,
    },
    solver::solve_error::SolveError,
};

/// On-disk form of one optimization instance: the two registry tables the
/// ingestion pipeline hands over. Maps are kept ordered so generated
/// instances serialize deterministically.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "RosterInstance")]
pub struct JsonRosterInstance {
    pub id: Option<String>,
    pub costs: BTreeMap<String, u64>,
    pub scores: BTreeMap<String, u64>,
}

impl JsonRosterInstance {
    pub fn build_problem(&self, constraint: RosterConstraint) -> Result<RosterProblem, SolveError> {
        let registry = CandidateRegistry::from_tables(self.costs.clone(), self.scores.clone());

        RosterProblem::new(registry.build_pool(constraint.min_score()), constraint)
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::roster_constraint::RosterConstraint;

    use super::JsonRosterInstance;

    #[test]
    fn test_build_problem_from_json() {
        let instance: JsonRosterInstance = serde_json::from_str(
            r#"{
                "id": "wimbledon-2025",
                "costs": { "alcaraz": 30000, "sinner": 40000, "paire": 5000 },
                "scores": { "alcaraz": 60, "sinner": 70 }
            }"#,
        )
        .unwrap();

        let problem = instance
            .build_problem(RosterConstraint::new(2, 100000, 0))
            .unwrap();

        // "paire" has no score entry and is excluded from the pool.
        assert_eq!(problem.pool().len(), 2);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<JsonRosterInstance>(
            r#"{ "costs": {}, "scores": {}, "bracket": [] }"#,
        );

        assert!(result.is_err());
    }
}
