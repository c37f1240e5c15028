use clap::Args;
use serde::{Deserialize, Serialize};

use crate::error::{LfResult, LoadForgeError};
use crate::optimizer::CoolingLaw;

/// Tuning knobs shared by the single-search and multi-restart commands.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Starting temperature for the Metropolis acceptance rule.
    #[arg(long, default_value_t = 100.0)]
    pub initial_temperature: f64,

    /// Temperature decay law.
    #[arg(long, value_enum, default_value = "boltzmann")]
    pub cooling: CoolingLaw,

    /// Hard iteration budget for a single search. 0 = no limit.
    #[arg(long, default_value_t = 100_000)]
    pub max_iterations: u64,

    /// Consecutive rejected moves before a single search gives up.
    #[arg(long, default_value_t = 100)]
    pub max_no_improvement: u64,

    /// Consecutive non-improving rounds before the swarm stops.
    #[arg(long, default_value_t = 10)]
    pub max_stale_rounds: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling: CoolingLaw::Boltzmann,
            max_iterations: 100_000,
            max_no_improvement: 100,
            max_stale_rounds: 10,
        }
    }
}

impl SearchParams {
    /// Rejects misconfigurations before any search begins.
    pub fn validate(&self) -> LfResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(LoadForgeError::Config(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if self.max_no_improvement == 0 {
            return Err(LoadForgeError::Config(
                "max_no_improvement must be positive".into(),
            ));
        }
        if self.max_stale_rounds == 0 {
            return Err(LoadForgeError::Config(
                "max_stale_rounds must be positive".into(),
            ));
        }
        Ok(())
    }
}
