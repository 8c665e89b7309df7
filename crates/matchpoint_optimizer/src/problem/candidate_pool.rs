use super::candidate::{Candidate, CandidateIdx};

/// The set of eligible candidates for one optimization run.
///
/// Candidates are held sorted by name, and `CandidateIdx` values refer to
/// positions in that ordering. This is the fixed enumeration order every
/// solver sees, so equal-score ties always resolve the same way across
/// runs. The pool is immutable for the duration of a solve.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub(crate) fn from_sorted(candidates: Vec<Candidate>) -> Self {
        debug_assert!(
            candidates
                .windows(2)
                .all(|pair| pair[0].name() < pair[1].name()),
            "pool candidates must be sorted by name and unique"
        );

        CandidatePool { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidate(&self, index: CandidateIdx) -> &Candidate {
        &self.candidates[index]
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn indices(&self) -> impl Iterator<Item = CandidateIdx> + use<> {
        (0..self.candidates.len()).map(CandidateIdx::new)
    }

    pub fn index_of(&self, name: &str) -> Option<CandidateIdx> {
        self.candidates
            .binary_search_by(|candidate| candidate.name().cmp(name))
            .ok()
            .map(CandidateIdx::new)
    }
}
