//! The `DispatchPolicy` trait: which depot answers an incident.

use ems_core::{DepotId, EmsError, SimTime, ZoneId};

use crate::{DispatchContext, DispatchResult};

/// The outcome of a successful dispatch decision.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Assignment {
    pub depot:       DepotId,
    /// One-way travel minutes from `depot` to the incident zone.
    pub travel_time: f64,
}

impl Assignment {
    /// When the unit is back at base: drive out, serve on scene, drive back.
    #[inline]
    pub fn return_time(&self, dispatched_at: SimTime, service_min: f64) -> SimTime {
        dispatched_at + (self.travel_time + service_min + self.travel_time)
    }
}

/// Pluggable dispatch rule.
///
/// Implementations decide; they do not allocate.  The engine takes the unit
/// out of the pool after `select` returns.
///
/// # Contract
///
/// - Must be deterministic for the same context.
/// - Must only return a depot that covers `zone` and has a free unit;
///   the engine reports a handler error otherwise.
/// - Return `Ok(None)` when nobody can serve the incident (it is logged as
///   blocked).  `Err` is reserved for malformed input such as an unknown
///   zone.
pub trait DispatchPolicy: Send + Sync + 'static {
    fn select(&self, zone: ZoneId, ctx: &DispatchContext<'_>) -> DispatchResult<Option<Assignment>>;
}

/// Closest covering depot with a free unit; ties go to the lowest depot index.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestAvailable;

impl DispatchPolicy for NearestAvailable {
    fn select(&self, zone: ZoneId, ctx: &DispatchContext<'_>) -> DispatchResult<Option<Assignment>> {
        let row = ctx.coverage.row(zone).ok_or(EmsError::UnknownZone(zone))?;

        let mut best: Option<Assignment> = None;
        for (j, &covered) in row.iter().enumerate() {
            let depot = DepotId(j as u32);
            if !covered || ctx.pool.available_count(depot) == 0 {
                continue;
            }
            let travel_time = ctx
                .times
                .travel_time(zone, depot)
                .ok_or(EmsError::UnknownDepot(depot))?;
            // Strict `<` keeps the earlier (lower-index) depot on ties.
            if best.is_none_or(|b| travel_time < b.travel_time) {
                best = Some(Assignment { depot, travel_time });
            }
        }
        Ok(best)
    }
}
