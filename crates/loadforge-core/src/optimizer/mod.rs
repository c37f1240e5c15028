pub mod anneal;
pub mod cooling;
pub mod mutation;
pub mod runner;

pub use self::anneal::{AnnealOutcome, Annealer};
pub use self::cooling::CoolingLaw;
pub use self::runner::{OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback};
