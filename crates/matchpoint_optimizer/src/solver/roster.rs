use serde::Serialize;
use smallvec::SmallVec;

use crate::problem::{
    candidate::CandidateIdx, candidate_pool::CandidatePool, roster_constraint::RosterConstraint,
};

pub type RosterMembers = SmallVec<[CandidateIdx; 8]>;

/// A fixed-size selection of candidates with its derived totals.
///
/// Rosters are value objects: the totals are computed once at construction
/// and a "changed" roster is always a new value, never an in-place
/// mutation. Members are kept sorted by index so identical selections
/// compare equal regardless of the order they were assembled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    members: RosterMembers,
    total_cost: u64,
    total_score: u64,
}

impl Roster {
    pub fn new(pool: &CandidatePool, mut members: RosterMembers) -> Self {
        members.sort_unstable();
        debug_assert!(
            members.windows(2).all(|pair| pair[0] < pair[1]),
            "roster members must be distinct"
        );

        let (total_cost, total_score) = members.iter().fold((0, 0), |(cost, score), &index| {
            let candidate = pool.candidate(index);
            (cost + candidate.cost(), score + candidate.score())
        });

        Roster {
            members,
            total_cost,
            total_score,
        }
    }

    pub fn from_indices(pool: &CandidatePool, indices: &[usize]) -> Self {
        Roster::new(pool, indices.iter().copied().map(CandidateIdx::new).collect())
    }

    pub fn members(&self) -> &[CandidateIdx] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn is_feasible(&self, constraint: &RosterConstraint) -> bool {
        self.total_cost <= constraint.budget()
    }

    pub fn contains(&self, index: CandidateIdx) -> bool {
        self.members.binary_search(&index).is_ok()
    }

    /// The roster obtained by swapping the member at `position` for
    /// `replacement`. The caller guarantees `replacement` is not already a
    /// member.
    pub fn with_replacement(
        &self,
        pool: &CandidatePool,
        position: usize,
        replacement: CandidateIdx,
    ) -> Self {
        let mut members = self.members.clone();
        members[position] = replacement;
        Roster::new(pool, members)
    }
}
