use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::Table;
use matchpoint_optimizer::{
    json::types::JsonRosterInstance,
    problem::roster_constraint::RosterConstraint,
    report::RosterReport,
    solver::{
        solve_error::SolveError,
        solve_outcome::{SearchCompletion, SolveOutcome},
        solver::Solver,
        solver_params::SolverParams,
    },
};
use tracing::{debug, info, warn};

use crate::parsers::{self, StrategyArg};

#[derive(Args)]
pub struct OptimizeArgs {
    /// Instance file with the cost and score tables
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Number of candidates to select
    #[arg(short = 'k', long)]
    roster_size: usize,

    /// Budget ceiling for the roster's total cost
    #[arg(short, long)]
    budget: u64,

    /// Candidates scoring below this are dropped before solving
    #[arg(long, default_value_t = 0)]
    min_score: u64,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::HillClimb)]
    strategy: StrategyArg,

    /// Target score for the random-sample strategy
    #[arg(long)]
    target: Option<u64>,

    /// Sampling iteration cap
    #[arg(long, short = 'n')]
    iterations: Option<usize>,

    #[arg(long, default_value_t = 2427121)]
    seed: u64,

    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<jiff::SignedDuration>,

    /// Write the winning roster as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let file = File::open(&args.input)?;
    let instance: JsonRosterInstance = serde_json::from_reader(BufReader::new(file))?;

    let constraint = RosterConstraint::new(args.roster_size, args.budget, args.min_score);
    let problem = instance.build_problem(constraint)?;

    let mut params = SolverParams {
        strategy: args.strategy.into(),
        target_score: args.target,
        rng_seed: args.seed,
        timeout: args.timeout,
        ..SolverParams::default()
    };
    if let Some(iterations) = args.iterations {
        params.max_iterations = iterations;
    }

    let mut solver = Solver::new(problem, params);
    solver.on_best_roster(|roster| {
        debug!(
            "Improved: score = {}, cost = {}",
            roster.total_score(),
            roster.total_cost()
        );
    });

    let outcome = match solver.solve() {
        Ok(outcome) => outcome,
        Err(SolveError::ThresholdUnreached {
            target,
            iterations,
            best: Some(best),
        }) => {
            // Surface the best-found roster anyway; the caller decides
            // whether a sub-target answer is acceptable.
            warn!("Target score {target} not reached after {iterations} samples, best found below");
            SolveOutcome {
                roster: best,
                completion: SearchCompletion::SampleBudgetExhausted,
                iterations,
            }
        }
        Err(error) => return Err(error.into()),
    };

    let report = RosterReport::new(solver.problem(), &outcome);
    print_report(&report);

    if !outcome.completion.is_complete() {
        warn!("Search ended early: {:?}", outcome.completion);
    }

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        serde_json::to_writer_pretty(File::create(&out)?, &report)?;
        info!("Report written to {:?}", out);
    }

    Ok(())
}

fn print_report(report: &RosterReport) {
    let mut table = Table::new();
    table.set_header(vec!["Candidate", "Cost", "Projected score"]);

    for entry in &report.entries {
        table.add_row(vec![
            entry.name.clone(),
            entry.cost.to_string(),
            entry.score.to_string(),
        ]);
    }
    table.add_row(vec![
        String::from("total"),
        report.total_cost.to_string(),
        report.total_score.to_string(),
    ]);

    println!("{table}");
}
