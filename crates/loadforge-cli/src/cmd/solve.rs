use clap::Args;
use loadforge_core::config::SearchParams;
use loadforge_core::error::LfResult;
use loadforge_core::jobs;
use loadforge_core::optimizer::Annealer;
use loadforge_core::schedule::Schedule;
use std::sync::Arc;
use tracing::info;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// CSV file with a header line followed by job_id,duration rows.
    #[arg(short, long, default_value = "jobs.csv")]
    pub jobs: String,

    #[arg(short, long, default_value_t = 40)]
    pub processors: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write a JSON summary of the best schedule here.
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub search: SearchParams,
}

pub fn run(args: SolveArgs) -> LfResult<()> {
    args.search.validate()?;

    info!("📂 Loading jobs from {}", args.jobs);
    let durations = jobs::load_job_durations(&args.jobs)?;
    info!(
        "Scheduling {} jobs across {} processors ({:?} cooling)",
        durations.len(),
        args.processors,
        args.search.cooling
    );

    let initial = Schedule::random(Arc::new(durations), args.processors, args.seed)?;

    let annealer = Annealer {
        initial_temperature: args.search.initial_temperature,
        cooling: args.search.cooling,
        max_iterations: args.search.max_iterations,
        max_no_improvement: args.search.max_no_improvement,
    };
    let outcome = annealer.run(initial);

    info!(
        "Search stopped after {} iterations ({} accepted, {} improving)",
        outcome.iterations, outcome.accepted_moves, outcome.improving_moves
    );

    reports::print_load_table(&outcome.best);
    reports::write_summary(&outcome.best, args.output.as_deref())?;
    info!("🏆 Best solution found with cost: {}", outcome.best_cost);
    Ok(())
}
