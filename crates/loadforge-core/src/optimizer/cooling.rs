use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Temperature decay laws.
///
/// Each maps `(T0, k)` to the temperature for iteration `k + 1`, with `k`
/// zero-based. The `k + 2` offset keeps every denominator above `ln(1)`
/// and zero.
///
/// | Law         | Formula                     |
/// |-------------|-----------------------------|
/// | Boltzmann   | `T0 / ln(2 + k)`            |
/// | Cauchy      | `T0 / (2 + k)`              |
/// | Logarithmic | `T0 * ln(2 + k) / (2 + k)`  |
///
/// Boltzmann cools slowest (the classic asymptotic-convergence schedule),
/// Cauchy fastest; Logarithmic sits between them for large `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoolingLaw {
    Boltzmann,
    Cauchy,
    Logarithmic,
}

impl CoolingLaw {
    /// Temperature for the iteration following `iteration`.
    pub fn next_temperature(&self, initial: f64, iteration: u64) -> f64 {
        let k = (iteration + 2) as f64;
        match self {
            CoolingLaw::Boltzmann => initial / k.ln(),
            CoolingLaw::Cauchy => initial / k,
            CoolingLaw::Logarithmic => initial * k.ln() / k,
        }
    }
}
