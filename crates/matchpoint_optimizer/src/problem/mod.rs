pub mod candidate;
pub mod candidate_pool;
pub mod registry;
pub mod roster_constraint;
pub mod roster_problem;
