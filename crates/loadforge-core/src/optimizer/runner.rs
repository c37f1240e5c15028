use crate::config::SearchParams;
use crate::error::{LfResult, LoadForgeError};
use crate::optimizer::anneal::{AnnealOutcome, Annealer};
use crate::optimizer::cooling::CoolingLaw;
use crate::schedule::Schedule;
use rayon::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub struct OptimizationOptions {
    pub num_threads: usize,
    pub initial_temperature: f64,
    pub cooling: CoolingLaw,
    pub max_no_improvement: u64,
    pub max_stale_rounds: u32,

    /// Base seed for reproducible runs. `None` derives per-round seeds
    /// from the wall clock.
    pub seed: Option<u64>,
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            num_threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            initial_temperature: params.initial_temperature,
            cooling: params.cooling,
            max_no_improvement: params.max_no_improvement,
            max_stale_rounds: params.max_stale_rounds,
            seed: None,
        }
    }
}

pub struct OptimizationResult {
    pub best: Schedule,
    pub best_cost: f64,
    pub rounds: usize,
}

/// Per-round hook. Return `false` to stop after the current round.
pub trait ProgressCallback: Send + Sync {
    fn on_round(&self, round: usize, best_cost: f64, improved: bool) -> bool;
}

impl ProgressCallback for () {
    fn on_round(&self, _round: usize, _best_cost: f64, _improved: bool) -> bool {
        true
    }
}

/// Multi-restart controller: each round forks the global best into
/// independent annealing searches, joins them all, then folds the round
/// minimum back in.
pub struct Optimizer {
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(options: OptimizationOptions) -> Self {
        Self { options }
    }

    pub fn run<CB: ProgressCallback>(
        &self,
        initial: Schedule,
        callback: CB,
    ) -> LfResult<OptimizationResult> {
        let opts = &self.options;

        if opts.num_threads == 0 {
            return Err(LoadForgeError::Config(
                "thread count must be positive".into(),
            ));
        }
        if !opts.initial_temperature.is_finite() || opts.initial_temperature <= 0.0 {
            return Err(LoadForgeError::Config(format!(
                "initial_temperature must be positive, got {}",
                opts.initial_temperature
            )));
        }

        // Restart searches are bounded by patience alone.
        let annealer = Annealer {
            initial_temperature: opts.initial_temperature,
            cooling: opts.cooling,
            max_iterations: 0,
            max_no_improvement: opts.max_no_improvement,
        };

        let mut global_best_cost = initial.cost();
        let mut global_best = initial;
        let mut stale_rounds: u32 = 0;
        let mut round: usize = 0;

        while stale_rounds < opts.max_stale_rounds {
            let base_seed = match opts.seed {
                Some(s) => s.wrapping_add((round * opts.num_threads) as u64),
                None => wall_clock_seed(),
            };

            // Every worker sees the same global-best snapshot; the barrier
            // below is the only synchronization point, so no lock guards
            // the snapshot itself.
            let locals: Vec<AnnealOutcome> = (0..opts.num_threads)
                .into_par_iter()
                .map(|worker| {
                    let seed = base_seed.wrapping_add(worker as u64);
                    annealer.run(global_best.fork(Some(seed)))
                })
                .collect();

            // Fold in the round minimum, not the first improvement found,
            // so results don't depend on scan order.
            let mut improved = false;
            for outcome in locals {
                if outcome.best_cost < global_best_cost {
                    global_best_cost = outcome.best_cost;
                    global_best = outcome.best;
                    improved = true;
                }
            }

            if improved {
                stale_rounds = 0;
            } else {
                stale_rounds += 1;
            }
            round += 1;

            debug!(
                "Round {} done: best cost {} ({} stale)",
                round, global_best_cost, stale_rounds
            );

            if !callback.on_round(round, global_best_cost, improved) {
                break;
            }
        }

        Ok(OptimizationResult {
            best: global_best,
            best_cost: global_best_cost,
            rounds: round,
        })
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x10adf04e)
}
