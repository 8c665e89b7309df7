use clap::ValueEnum;
use matchpoint_optimizer::solver::search_strategy::SearchStrategy;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StrategyArg {
    Exhaustive,
    HillClimb,
    RandomSample,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => SearchStrategy::Exhaustive,
            StrategyArg::HillClimb => SearchStrategy::HillClimb,
            StrategyArg::RandomSample => SearchStrategy::RandomSample,
        }
    }
}
