//! Aggregate counts over a mission log.

use std::collections::BTreeSet;

use crate::MissionLogEntry;

/// Counts derived from a slice of log entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSummary {
    /// Incidents handled: `dispatched + blocked`.
    pub arrivals:       usize,
    pub dispatched:     usize,
    pub blocked:        usize,
    pub completed:      usize,
    /// Dispatched in this slice without a matching `Completed`.
    pub open:           usize,
    pub handler_errors: usize,
}

impl LogSummary {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a MissionLogEntry>,
    {
        let mut s = LogSummary::default();
        let mut open = BTreeSet::new();
        for entry in entries {
            match entry {
                MissionLogEntry::Blocked { .. } => s.blocked += 1,
                MissionLogEntry::Dispatched { mission, .. } => {
                    s.dispatched += 1;
                    open.insert(*mission);
                }
                MissionLogEntry::Completed { mission, .. } => {
                    s.completed += 1;
                    open.remove(mission);
                }
                MissionLogEntry::HandlerError { .. } => s.handler_errors += 1,
            }
        }
        s.arrivals = s.dispatched + s.blocked;
        s.open = open.len();
        s
    }

    /// Fraction of incidents that got a unit, or `None` with no incidents.
    pub fn served_ratio(&self) -> Option<f64> {
        (self.arrivals > 0).then(|| self.dispatched as f64 / self.arrivals as f64)
    }
}
