//! Read-only state passed to the dispatch policy.

use ems_core::{CoverageMatrix, SimTime, TimeMatrix};

use crate::ResourcePool;

/// A read-only view of everything a [`DispatchPolicy`][crate::DispatchPolicy]
/// may consult for one arrival.
///
/// Built by the engine for each arrival event.  The engine never mutates the
/// pool while a context is live.
pub struct DispatchContext<'a> {
    /// Time of the arrival being handled.
    pub now: SimTime,

    /// Which depot can reach which zone in time.
    pub coverage: &'a CoverageMatrix,

    /// One-way travel minutes, depot to zone.
    pub times: &'a TimeMatrix,

    /// Current available/busy counts.
    pub pool: &'a ResourcePool,
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(
        now:      SimTime,
        coverage: &'a CoverageMatrix,
        times:    &'a TimeMatrix,
        pool:     &'a ResourcePool,
    ) -> Self {
        Self { now, coverage, times, pool }
    }
}
