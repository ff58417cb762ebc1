//! A single dispatched mission.

use ems_core::{DepotId, MissionId, SimTime, UnitId, ZoneId};

/// One unit's round trip: depot → incident zone → on-scene service → depot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub id:    MissionId,
    pub zone:  ZoneId,
    pub depot: DepotId,
    pub unit:  UnitId,

    /// Time of the dispatch decision.
    pub start_time: SimTime,

    /// Time the unit is due back at its depot.  The completion event is
    /// scheduled for exactly this time.
    pub expected_end_time: SimTime,
}

impl Mission {
    /// Total minutes the unit is unavailable.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.expected_end_time - self.start_time
    }
}
