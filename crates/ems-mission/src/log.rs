//! The append-only mission log.

use std::fmt;

use ems_core::{DepotId, MissionId, SimTime, UnitId, ZoneId};

/// One line of the audit trail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionLogEntry {
    /// No covering depot had a free unit when the incident arrived.
    Blocked { time: SimTime, zone: ZoneId },

    /// A unit left `depot` for `zone`.
    Dispatched {
        time:         SimTime,
        zone:         ZoneId,
        depot:        DepotId,
        unit:         UnitId,
        mission:      MissionId,
        expected_end: SimTime,
    },

    /// The unit is back at base and available again.
    Completed {
        time:    SimTime,
        mission: MissionId,
        depot:   DepotId,
        unit:    UnitId,
    },

    /// Handling the event with this `sequence` failed; the run carried on.
    HandlerError {
        time:     SimTime,
        sequence: u64,
        /// Rendering of the offending event.
        event:    String,
        message:  String,
    },
}

impl MissionLogEntry {
    /// Simulated time at which the entry was appended.
    pub fn time(&self) -> SimTime {
        match self {
            MissionLogEntry::Blocked { time, .. }
            | MissionLogEntry::Dispatched { time, .. }
            | MissionLogEntry::Completed { time, .. }
            | MissionLogEntry::HandlerError { time, .. } => *time,
        }
    }

    /// The mission this entry refers to, if any.
    pub fn mission(&self) -> Option<MissionId> {
        match self {
            MissionLogEntry::Dispatched { mission, .. }
            | MissionLogEntry::Completed { mission, .. } => Some(*mission),
            MissionLogEntry::Blocked { .. } | MissionLogEntry::HandlerError { .. } => None,
        }
    }

    /// Short tag: `blocked`, `dispatched`, `completed`, or `handler_error`.
    pub fn label(&self) -> &'static str {
        match self {
            MissionLogEntry::Blocked { .. } => "blocked",
            MissionLogEntry::Dispatched { .. } => "dispatched",
            MissionLogEntry::Completed { .. } => "completed",
            MissionLogEntry::HandlerError { .. } => "handler_error",
        }
    }
}

impl fmt::Display for MissionLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionLogEntry::Blocked { time, zone } => {
                write!(f, "{time} blocked {zone}")
            }
            MissionLogEntry::Dispatched { time, zone, depot, unit, mission, expected_end } => {
                write!(f, "{time} dispatched {mission}: {depot}/{unit} -> {zone}, back {expected_end}")
            }
            MissionLogEntry::Completed { time, mission, depot, unit } => {
                write!(f, "{time} completed {mission}: {depot}/{unit}")
            }
            MissionLogEntry::HandlerError { time, sequence, event, message } => {
                write!(f, "{time} error in event #{sequence} ({event}): {message}")
            }
        }
    }
}

/// Append-only sequence of [`MissionLogEntry`].
///
/// Only the tracker can append; everyone else gets slices.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionLog {
    entries: Vec<MissionLogEntry>,
}

impl MissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: MissionLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[MissionLogEntry] {
        &self.entries
    }

    /// Entries appended at or after position `from`; empty if `from` is past
    /// the end.
    pub fn since(&self, from: usize) -> &[MissionLogEntry] {
        self.entries.get(from..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&MissionLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MissionLogEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<MissionLogEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a MissionLog {
    type Item = &'a MissionLogEntry;
    type IntoIter = std::slice::Iter<'a, MissionLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
