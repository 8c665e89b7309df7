use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::Table;
use matchpoint_optimizer::{
    json::types::JsonRosterInstance,
    problem::roster_constraint::RosterConstraint,
    solver::{
        search_strategy::SearchStrategy, solve_error::SolveError, solver::Solver,
        solver_params::SolverParams,
    },
};
use rayon::prelude::*;
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct CompareArgs {
    /// Instance file with the cost and score tables
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(short = 'k', long)]
    roster_size: usize,

    #[arg(short, long)]
    budget: u64,

    #[arg(long, default_value_t = 0)]
    min_score: u64,

    #[arg(long)]
    target: Option<u64>,

    #[arg(long, short = 'n')]
    iterations: Option<usize>,

    #[arg(long, default_value_t = 2427121)]
    seed: u64,

    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<jiff::SignedDuration>,
}

const STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::Exhaustive,
    SearchStrategy::HillClimb,
    SearchStrategy::RandomSample,
];

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let file = File::open(&args.input)?;
    let instance: JsonRosterInstance = serde_json::from_reader(BufReader::new(file))?;

    let constraint = RosterConstraint::new(args.roster_size, args.budget, args.min_score);
    let problem = instance.build_problem(constraint)?;

    info!(
        "Comparing strategies on a pool of {} candidates",
        problem.pool().len()
    );

    // Each solve owns its private problem snapshot and seeded RNG, so the
    // three strategies run in parallel without any coordination.
    let results = STRATEGIES
        .par_iter()
        .map(|&strategy| {
            let mut params = SolverParams {
                strategy,
                target_score: args.target,
                rng_seed: args.seed,
                timeout: args.timeout,
                ..SolverParams::default()
            };
            if let Some(iterations) = args.iterations {
                params.max_iterations = iterations;
            }

            (strategy, Solver::new(problem.clone(), params).solve())
        })
        .collect::<Vec<_>>();

    let mut table = Table::new();
    table.set_header(vec![
        "Strategy",
        "Score",
        "Cost",
        "Iterations",
        "Completion",
    ]);

    for (strategy, result) in &results {
        match result {
            Ok(outcome) => table.add_row(vec![
                strategy.to_string(),
                outcome.roster.total_score().to_string(),
                outcome.roster.total_cost().to_string(),
                outcome.iterations.to_string(),
                format!("{:?}", outcome.completion),
            ]),
            Err(SolveError::ThresholdUnreached {
                iterations,
                best: Some(best),
                ..
            }) => table.add_row(vec![
                strategy.to_string(),
                best.total_score().to_string(),
                best.total_cost().to_string(),
                iterations.to_string(),
                String::from("ThresholdUnreached"),
            ]),
            Err(error) => table.add_row(vec![
                strategy.to_string(),
                String::from("-"),
                String::from("-"),
                String::from("-"),
                error.to_string(),
            ]),
        };
    }

    println!("{table}");

    Ok(())
}
