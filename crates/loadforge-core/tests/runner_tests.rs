use loadforge_core::error::LoadForgeError;
use loadforge_core::optimizer::{
    CoolingLaw, OptimizationOptions, Optimizer, ProgressCallback,
};
use loadforge_core::schedule::Schedule;
use std::sync::Arc;
use std::sync::Mutex;

fn schedule(durations: &[u64], processors: usize, seed: u64) -> Schedule {
    Schedule::random(Arc::new(durations.to_vec()), processors, Some(seed))
        .expect("valid configuration")
}

// Cauchy cools fast enough that patience-bounded searches stop quickly on
// the small fixtures used here.
fn options(num_threads: usize, seed: u64) -> OptimizationOptions {
    OptimizationOptions {
        num_threads,
        initial_temperature: 100.0,
        cooling: CoolingLaw::Cauchy,
        max_no_improvement: 50,
        max_stale_rounds: 3,
        seed: Some(seed),
    }
}

struct CostRecorder {
    costs: Mutex<Vec<f64>>,
}

impl ProgressCallback for &CostRecorder {
    fn on_round(&self, _round: usize, best_cost: f64, _improved: bool) -> bool {
        self.costs.lock().unwrap().push(best_cost);
        true
    }
}

struct StopAfterFirstRound;

impl ProgressCallback for StopAfterFirstRound {
    fn on_round(&self, _round: usize, _best_cost: f64, _improved: bool) -> bool {
        false
    }
}

#[test]
fn test_zero_threads_rejected_before_spawning() {
    let optimizer = Optimizer::new(options(0, 1));
    let result = optimizer.run(schedule(&[1, 2, 3], 2, 1), ());

    assert!(matches!(result, Err(LoadForgeError::Config(_))));
}

#[test]
fn test_non_positive_temperature_rejected() {
    let mut opts = options(2, 1);
    opts.initial_temperature = 0.0;

    let optimizer = Optimizer::new(opts);
    let result = optimizer.run(schedule(&[1, 2, 3], 2, 1), ());

    assert!(matches!(result, Err(LoadForgeError::Config(_))));
}

#[test]
fn test_global_best_is_non_increasing_across_rounds() {
    let recorder = CostRecorder {
        costs: Mutex::new(Vec::new()),
    };

    let optimizer = Optimizer::new(options(4, 7));
    let result = optimizer
        .run(schedule(&[9, 2, 7, 4, 4, 8, 1, 6, 12, 3], 3, 7), &recorder)
        .expect("run succeeds");

    let costs = recorder.costs.lock().unwrap();
    assert!(!costs.is_empty());
    for window in costs.windows(2) {
        assert!(
            window[1] <= window[0],
            "global best warmed up: {} -> {}",
            window[0],
            window[1]
        );
    }
    assert_eq!(result.best_cost, *costs.last().unwrap());
}

#[test]
fn test_result_never_worse_than_initial() {
    let initial = schedule(&[9, 2, 7, 4, 4, 8, 1, 6], 3, 11);
    let initial_cost = initial.cost();

    let optimizer = Optimizer::new(options(2, 11));
    let result = optimizer.run(initial, ()).expect("run succeeds");

    assert!(result.best_cost <= initial_cost);
    assert!(result.best.is_consistent());
    assert_eq!(result.best.cost(), result.best_cost);
}

#[test]
fn test_stops_after_stale_rounds() {
    // A single processor never improves, so the loop runs exactly
    // max_stale_rounds rounds.
    let optimizer = Optimizer::new(options(2, 5));
    let result = optimizer
        .run(schedule(&[5, 5, 5], 1, 5), ())
        .expect("run succeeds");

    assert_eq!(result.rounds, 3);
    assert_eq!(result.best_cost, 0.0);
}

#[test]
fn test_callback_can_stop_the_loop() {
    let optimizer = Optimizer::new(options(2, 9));
    let result = optimizer
        .run(schedule(&[4, 8, 2, 6, 1], 2, 9), StopAfterFirstRound)
        .expect("run succeeds");

    assert_eq!(result.rounds, 1);
}

#[test]
fn test_uniform_jobs_converge_to_loose_bound() {
    let optimizer = Optimizer::new(options(4, 13));
    let result = optimizer
        .run(schedule(&[4, 4, 4, 4, 4, 4], 2, 13), ())
        .expect("run succeeds");

    assert!(
        result.best_cost <= 4.0,
        "expected near-balanced split, got {}",
        result.best_cost
    );
}

#[test]
fn test_seeded_swarm_is_reproducible() {
    let run = || {
        let optimizer = Optimizer::new(options(3, 21));
        optimizer
            .run(schedule(&[13, 8, 21, 5, 3, 17, 11, 2], 4, 21), ())
            .expect("run succeeds")
    };

    let a = run();
    let b = run();

    assert_eq!(a.best_cost, b.best_cost);
    assert_eq!(a.rounds, b.rounds);
    assert_eq!(a.best.loads(), b.best.loads());
}
