use clap::Args;
use loadforge_core::config::SearchParams;
use loadforge_core::error::LfResult;
use loadforge_core::jobs;
use loadforge_core::optimizer::{OptimizationOptions, Optimizer, ProgressCallback};
use loadforge_core::schedule::Schedule;
use std::sync::Arc;
use tracing::info;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct SwarmArgs {
    /// CSV file with a header line followed by job_id,duration rows.
    #[arg(short, long, default_value = "jobs.csv")]
    pub jobs: String,

    #[arg(short, long, default_value_t = 40)]
    pub processors: usize,

    /// Independent searches per round. Defaults to the available cores.
    #[arg(short, long)]
    pub threads: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write a JSON summary of the best schedule here.
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub search: SearchParams,
}

struct RoundLogger;

impl ProgressCallback for RoundLogger {
    fn on_round(&self, round: usize, best_cost: f64, improved: bool) -> bool {
        info!(
            "Round {:3} | Current best solution cost: {}{}",
            round,
            best_cost,
            if improved { " ⬇" } else { "" }
        );
        true
    }
}

pub fn run(args: SwarmArgs) -> LfResult<()> {
    args.search.validate()?;

    info!("📂 Loading jobs from {}", args.jobs);
    let durations = jobs::load_job_durations(&args.jobs)?;

    let initial = Schedule::random(Arc::new(durations), args.processors, args.seed)?;

    let mut options = OptimizationOptions::from(&args.search);
    if let Some(threads) = args.threads {
        options.num_threads = threads;
    }
    options.seed = args.seed;

    info!(
        "Swarm of {} searches per round, {:?} cooling, stopping after {} stale rounds",
        options.num_threads, options.cooling, options.max_stale_rounds
    );

    let optimizer = Optimizer::new(options);
    let result = optimizer.run(initial, RoundLogger)?;

    reports::print_load_table(&result.best);
    reports::write_summary(&result.best, args.output.as_deref())?;
    info!(
        "🏆 Best solution found with cost: {} after {} rounds",
        result.best_cost, result.rounds
    );
    Ok(())
}
