//! Run parameters.

use crate::{EmsError, EmsResult};

/// Top-level simulation configuration.
///
/// Typically filled in by the application from whatever parameter source it
/// uses and passed to the engine builder, which calls [`validate`] before
/// anything else happens.
///
/// [`validate`]: SimConfig::validate
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Expected incident arrivals per simulated minute (Poisson rate `λ`).
    pub arrival_rate_per_min: f64,

    /// Length of the arrival window in minutes.  No incident arrives at or
    /// after the horizon; completions may still fall beyond it.
    pub horizon_min: f64,

    /// Mean of the exponential on-scene service time, in minutes.
    pub mean_service_min: f64,

    /// Master RNG seed.  The same seed always produces an identical log.
    pub seed: u64,
}

impl Default for SimConfig {
    /// Ten calls an hour over one day, 20-minute mean on-scene time.
    fn default() -> Self {
        Self {
            arrival_rate_per_min: 10.0 / 60.0,
            horizon_min:          24.0 * 60.0,
            mean_service_min:     20.0,
            seed:                 0,
        }
    }
}

impl SimConfig {
    /// Set the arrival rate from a calls-per-hour figure.
    pub fn with_hourly_rate(mut self, calls_per_hour: f64) -> Self {
        self.arrival_rate_per_min = calls_per_hour / 60.0;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject non-positive or non-finite rate, horizon and mean service time.
    pub fn validate(&self) -> EmsResult<()> {
        positive("arrival rate", self.arrival_rate_per_min)?;
        positive("horizon", self.horizon_min)?;
        positive("mean service time", self.mean_service_min)?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> EmsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EmsError::Config(format!("{name} must be positive and finite, got {value}")))
    }
}
