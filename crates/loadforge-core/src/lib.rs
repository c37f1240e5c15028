// Parallel simulated-annealing scheduler for identical processors.
//
// `Schedule` is the unit of search; everything under `optimizer` mutates,
// anneals and merges schedules. `jobs` is the input boundary.

pub mod config;
pub mod error;
pub mod jobs;
pub mod optimizer;
pub mod schedule;
