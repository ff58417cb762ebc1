//! On-scene service duration.

use ems_core::{EmsError, EmsResult, SimRng};

/// Exponentially distributed on-scene time with a fixed mean.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ServiceTime {
    mean_min: f64,
}

impl ServiceTime {
    /// # Errors
    /// `EmsError::Config` unless `mean_min` is positive and finite.
    pub fn new(mean_min: f64) -> EmsResult<Self> {
        if !(mean_min.is_finite() && mean_min > 0.0) {
            return Err(EmsError::Config(format!(
                "mean service time must be positive and finite, got {mean_min}"
            )));
        }
        Ok(Self { mean_min })
    }

    pub fn mean(&self) -> f64 {
        self.mean_min
    }

    /// One service duration in minutes.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        rng.exponential(1.0 / self.mean_min)
    }
}
