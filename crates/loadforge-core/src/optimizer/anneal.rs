use crate::optimizer::cooling::CoolingLaw;
use crate::optimizer::mutation;
use crate::schedule::Schedule;

/// One independent Metropolis search.
#[derive(Debug, Clone, Copy)]
pub struct Annealer {
    pub initial_temperature: f64,

    pub cooling: CoolingLaw,

    /// Hard iteration budget. 0 = no limit; the multi-restart controller
    /// relies solely on the no-improvement bound.
    pub max_iterations: u64,

    /// Consecutive rejected candidates before the search stops.
    pub max_no_improvement: u64,
}

/// Result of a single annealing run.
#[derive(Debug)]
pub struct AnnealOutcome {
    /// Best schedule seen over the whole trajectory.
    pub best: Schedule,

    /// Cost of `best`; never above the seed schedule's cost.
    pub best_cost: f64,

    pub iterations: u64,
    pub accepted_moves: u64,
    pub improving_moves: u64,
    pub final_temperature: f64,
}

impl Annealer {
    /// Runs the search to termination, consuming the seed schedule as the
    /// starting trajectory. Fully deterministic for a seeded schedule.
    pub fn run(&self, seed: Schedule) -> AnnealOutcome {
        let mut current = seed;
        let mut rng = current.split_rng();

        let mut best = current.fork(None);
        let mut best_cost = best.cost();

        let mut temperature = self.initial_temperature;
        let mut iteration: u64 = 0;
        let mut no_improvement: u64 = 0;
        let mut accepted_moves: u64 = 0;
        let mut improving_moves: u64 = 0;

        while (self.max_iterations == 0 || iteration < self.max_iterations)
            && no_improvement < self.max_no_improvement
        {
            let mut candidate = current.fork(Some(rng.u64(..)));
            if mutation::reassign_random_job(&mut candidate).is_none() {
                // Degenerate neighborhood: nothing can ever move.
                break;
            }
            let candidate_cost = candidate.cost();

            if candidate_cost < best_cost {
                best = candidate.fork(None);
                best_cost = candidate_cost;
                current = candidate;
                no_improvement = 0;
                accepted_moves += 1;
                improving_moves += 1;
            } else {
                // Metropolis rule: admit a worsening move with probability
                // shrinking as the temperature cools.
                let probability = (-(candidate_cost - best_cost) / temperature).exp();
                if probability >= rng.f64() {
                    current = candidate;
                    no_improvement = 0;
                    accepted_moves += 1;
                } else {
                    no_improvement += 1;
                }
            }

            temperature = self.cooling.next_temperature(self.initial_temperature, iteration);
            iteration += 1;
        }

        AnnealOutcome {
            best,
            best_cost,
            iterations: iteration,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        }
    }
}
