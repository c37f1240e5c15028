use crate::schedule::Schedule;

/// Record of a single applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobMove {
    pub job: usize,
    pub from: usize,
    pub to: usize,
}

/// Moves one uniformly random job onto a uniformly random *different*
/// processor, using the schedule's own RNG stream.
///
/// Returns `None` without touching the schedule when no move exists:
/// zero jobs, or a single processor (resampling for a different target
/// would never terminate there).
pub fn reassign_random_job(schedule: &mut Schedule) -> Option<JobMove> {
    let num_jobs = schedule.num_jobs();
    let num_processors = schedule.num_processors();
    if num_jobs == 0 || num_processors < 2 {
        return None;
    }

    let job = schedule.rng_mut().usize(0..num_jobs);
    let from = schedule.processor_of(job);

    let mut to = schedule.rng_mut().usize(0..num_processors);
    while to == from {
        to = schedule.rng_mut().usize(0..num_processors);
    }

    schedule.reassign(job, to);
    Some(JobMove { job, from, to })
}
