//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a number of simulated minutes since
//! the start of the run, stored as `f64`.  Event timestamps come from
//! exponential draws, so there is no natural tick to round them to.
//!
//! `SimClock` holds the current time and refuses to move backwards.  Only the
//! engine advances it, and only to the timestamp of the event it just popped.

use std::cmp::Ordering;
use std::fmt;

use crate::{EmsError, EmsResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// A point in simulated time, in minutes from the start of the run.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Minutes since the start of the run.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Total order over all `f64` values, including NaN.
    ///
    /// Used by the event queue so that ordering never depends on
    /// `partial_cmp` returning `Some`.
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}min", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The run's virtual clock.  Starts at zero and is monotonically
/// non-decreasing.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock forward to `to`.
    ///
    /// Advancing to the current time is allowed (simultaneous events).
    ///
    /// # Errors
    /// `EmsError::ClockRegression` if `to` is earlier than `now` or is NaN.
    pub fn advance_to(&mut self, to: SimTime) -> EmsResult<()> {
        if to.0.is_nan() || to.0 < self.now.0 {
            return Err(EmsError::ClockRegression { now: self.now.0, to: to.0 });
        }
        self.now = to;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.now.0.max(0.0);
        let hours = (total / 60.0).floor() as u64;
        let minutes = total - hours as f64 * 60.0;
        write!(f, "{} ({}h{:05.2})", self.now, hours, minutes)
    }
}
