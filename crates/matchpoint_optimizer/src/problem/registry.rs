use fxhash::FxHashMap;
use tracing::debug;

use super::{candidate::Candidate, candidate_pool::CandidatePool};

/// Merges the two upstream tables (name -> cost, name -> projected score)
/// produced by the scraping pipeline into a [`CandidatePool`].
///
/// A name present in only one table is a pool-membership exclusion, not an
/// error: the upstream data is allowed to be incomplete. Repeated names
/// within one table keep the last value inserted.
#[derive(Debug, Clone, Default)]
pub struct CandidateRegistry {
    costs: FxHashMap<String, u64>,
    scores: FxHashMap<String, u64>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        CandidateRegistry::default()
    }

    pub fn from_tables(
        costs: impl IntoIterator<Item = (String, u64)>,
        scores: impl IntoIterator<Item = (String, u64)>,
    ) -> Self {
        CandidateRegistry {
            costs: costs.into_iter().collect(),
            scores: scores.into_iter().collect(),
        }
    }

    pub fn insert_cost(&mut self, name: impl Into<String>, cost: u64) {
        self.costs.insert(name.into(), cost);
    }

    pub fn insert_score(&mut self, name: impl Into<String>, score: u64) {
        self.scores.insert(name.into(), score);
    }

    pub fn build_pool(&self, min_score: u64) -> CandidatePool {
        let mut below_min_score = 0usize;

        let mut candidates = self
            .costs
            .iter()
            .filter_map(|(name, &cost)| {
                let &score = self.scores.get(name)?;

                if score < min_score {
                    below_min_score += 1;
                    return None;
                }

                Some(Candidate::new(name.clone(), cost, score))
            })
            .collect::<Vec<_>>();

        candidates.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        let matched = candidates.len() + below_min_score;
        debug!(
            "Built pool: {} candidates, {} below min score {}, {} without a cost/score counterpart",
            candidates.len(),
            below_min_score,
            min_score,
            self.costs.len() + self.scores.len() - 2 * matched,
        );

        CandidatePool::from_sorted(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateRegistry;

    fn table(entries: &[(&str, u64)]) -> Vec<(String, u64)> {
        entries
            .iter()
            .map(|&(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_only_names_in_both_tables_survive() {
        let registry = CandidateRegistry::from_tables(
            table(&[("alcaraz", 30000), ("sinner", 40000), ("no-score", 10000)]),
            table(&[("alcaraz", 60), ("sinner", 70), ("no-cost", 90)]),
        );

        let pool = registry.build_pool(0);

        assert_eq!(pool.len(), 2);
        assert!(pool.index_of("alcaraz").is_some());
        assert!(pool.index_of("sinner").is_some());
        assert!(pool.index_of("no-score").is_none());
        assert!(pool.index_of("no-cost").is_none());
    }

    #[test]
    fn test_min_score_filter() {
        let registry = CandidateRegistry::from_tables(
            table(&[("alcaraz", 30000), ("qualifier", 5000)]),
            table(&[("alcaraz", 60), ("qualifier", 10)]),
        );

        let pool = registry.build_pool(20);

        assert_eq!(pool.len(), 1);
        assert!(pool.index_of("qualifier").is_none());
    }

    #[test]
    fn test_pool_is_sorted_by_name() {
        let registry = CandidateRegistry::from_tables(
            table(&[("zverev", 30000), ("alcaraz", 30000), ("medvedev", 30000)]),
            table(&[("zverev", 50), ("alcaraz", 60), ("medvedev", 55)]),
        );

        let pool = registry.build_pool(0);
        let names = pool
            .candidates()
            .iter()
            .map(|candidate| candidate.name())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["alcaraz", "medvedev", "zverev"]);
    }

    #[test]
    fn test_repeated_insert_keeps_last_value() {
        let mut registry = CandidateRegistry::new();
        registry.insert_cost("alcaraz", 30000);
        registry.insert_cost("alcaraz", 35000);
        registry.insert_score("alcaraz", 60);

        let pool = registry.build_pool(0);
        let index = pool.index_of("alcaraz").unwrap();

        assert_eq!(pool.candidate(index).cost(), 35000);
    }
}
