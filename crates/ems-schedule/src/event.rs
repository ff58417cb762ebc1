//! Scheduled simulation events.

use std::fmt;

use ems_core::{DepotId, MissionId, SimTime, UnitId, ZoneId};

/// What happens when an event fires.
///
/// A plain tagged enum: the engine dispatches on it with a `match`, so events
/// carry data only and never a handler.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// An incident is reported in `zone`.
    Arrival { zone: ZoneId },

    /// `unit` of `depot` is back at base after `mission`.
    Completion {
        depot:   DepotId,
        unit:    UnitId,
        mission: MissionId,
    },
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival { zone } => write!(f, "arrival in {zone}"),
            EventKind::Completion { depot, unit, mission } => {
                write!(f, "completion of {mission} by {unit} at {depot}")
            }
        }
    }
}

/// An entry in the [`EventQueue`][crate::EventQueue].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time:     SimTime,
    /// Assigned by the queue at push time; breaks ties on equal `time`.
    pub sequence: u64,
    pub kind:     EventKind,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} @ {}", self.sequence, self.kind, self.time)
    }
}
