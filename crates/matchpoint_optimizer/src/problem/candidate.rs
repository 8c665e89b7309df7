use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(CandidateIdx, Candidate);

/// An entrant eligible for selection. The name is assumed to be already
/// canonical; the engine never interprets or special-cases it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    name: String,
    cost: u64,
    score: u64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, cost: u64, score: u64) -> Self {
        Candidate {
            name: name.into(),
            cost,
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}
