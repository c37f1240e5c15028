use crate::error::{LfResult, LoadForgeError};
use fastrand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// One candidate assignment of every job to a processor.
///
/// Loads are maintained incrementally: a full rescan happens only at
/// construction. Each schedule owns a private RNG stream so independent
/// searches never share random state.
#[derive(Debug)]
pub struct Schedule {
    durations: Arc<Vec<u64>>,
    assignment: Vec<u32>,
    loads: Vec<u64>,
    rng: Rng,
}

/// Flat snapshot of a schedule, used for JSON reports.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    pub cost: f64,
    pub loads: Vec<u64>,
    pub assignment: Vec<u32>,
}

impl Schedule {
    /// Builds a schedule with a uniformly random initial assignment.
    pub fn random(
        durations: Arc<Vec<u64>>,
        num_processors: usize,
        seed: Option<u64>,
    ) -> LfResult<Schedule> {
        if num_processors == 0 {
            return Err(LoadForgeError::Config(
                "processor count must be positive".into(),
            ));
        }
        if num_processors > u32::MAX as usize {
            return Err(LoadForgeError::Config(format!(
                "processor count {} out of range",
                num_processors
            )));
        }

        let mut rng = match seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };

        let mut assignment = Vec::with_capacity(durations.len());
        let mut loads = vec![0u64; num_processors];
        for &duration in durations.iter() {
            let processor = rng.usize(0..num_processors);
            assignment.push(processor as u32);
            loads[processor] += duration;
        }

        Ok(Schedule {
            durations,
            assignment,
            loads,
            rng,
        })
    }

    pub fn num_jobs(&self) -> usize {
        self.assignment.len()
    }

    pub fn num_processors(&self) -> usize {
        self.loads.len()
    }

    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    pub fn loads(&self) -> &[u64] {
        &self.loads
    }

    pub fn processor_of(&self, job: usize) -> usize {
        self.assignment[job] as usize
    }

    /// Load imbalance: most loaded minus least loaded processor.
    ///
    /// Zero exactly when every processor carries the same load, never
    /// negative.
    pub fn cost(&self) -> f64 {
        let max = self.loads.iter().max().copied().unwrap_or(0);
        let min = self.loads.iter().min().copied().unwrap_or(0);
        (max - min) as f64
    }

    /// Moves `job` onto `new_processor`, updating both loads in O(1).
    ///
    /// Caller contract: `new_processor` differs from the job's current
    /// processor.
    pub fn reassign(&mut self, job: usize, new_processor: usize) {
        let old_processor = self.assignment[job] as usize;
        debug_assert_ne!(old_processor, new_processor);

        let duration = self.durations[job];
        self.loads[old_processor] -= duration;
        self.loads[new_processor] += duration;
        self.assignment[job] = new_processor as u32;

        debug_assert!(self.is_consistent());
    }

    /// Deep copy with its own RNG stream.
    ///
    /// With `Some(seed)` the fork is reproducible; with `None` the stream
    /// is derived from this schedule's stream without mutating it.
    pub fn fork(&self, seed: Option<u64>) -> Schedule {
        Schedule {
            durations: Arc::clone(&self.durations),
            assignment: self.assignment.clone(),
            loads: self.loads.clone(),
            rng: match seed {
                Some(s) => Rng::with_seed(s),
                None => self.rng.clone(),
            },
        }
    }

    /// Checks that every job sits on a valid processor and that the cached
    /// loads match a full recount. Debugging aid, not a runtime gate.
    pub fn is_consistent(&self) -> bool {
        if self
            .assignment
            .iter()
            .any(|&p| p as usize >= self.loads.len())
        {
            return false;
        }

        let mut recount = vec![0u64; self.loads.len()];
        for (job, &processor) in self.assignment.iter().enumerate() {
            recount[processor as usize] += self.durations[job];
        }
        recount == self.loads
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            cost: self.cost(),
            loads: self.loads.clone(),
            assignment: self.assignment.clone(),
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Rng {
        &mut self.rng
    }

    /// Derives an independent RNG, advancing this schedule's stream.
    pub(crate) fn split_rng(&mut self) -> Rng {
        Rng::with_seed(self.rng.u64(..))
    }
}
