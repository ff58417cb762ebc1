//! The `MissionTracker`: active missions plus the log.

use std::collections::BTreeMap;
use std::fmt::Display;

use ems_core::{MissionId, SimTime, ZoneId};

use crate::{Mission, MissionError, MissionLog, MissionLogEntry, MissionResult};

/// Owns every open mission and the append-only log.
///
/// Each method that changes mission state appends exactly one log entry.
#[derive(Debug, Default)]
pub struct MissionTracker {
    /// Last id handed out; ids start at 1.
    last_id: u64,
    active:  BTreeMap<MissionId, Mission>,
    log:     MissionLog,
}

impl MissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next mission id.
    ///
    /// Ids are never reused, even if the dispatch that reserved one fails.
    pub fn allocate_id(&mut self) -> MissionId {
        self.last_id += 1;
        MissionId(self.last_id)
    }

    /// Start tracking `mission` and append its `Dispatched` entry.
    ///
    /// # Errors
    /// `DuplicateMission` if a mission with the same id is already active.
    pub fn open(&mut self, mission: Mission) -> MissionResult<()> {
        if self.active.contains_key(&mission.id) {
            return Err(MissionError::DuplicateMission(mission.id));
        }
        self.active.insert(mission.id, mission);
        self.log.push(MissionLogEntry::Dispatched {
            time:         mission.start_time,
            zone:         mission.zone,
            depot:        mission.depot,
            unit:         mission.unit,
            mission:      mission.id,
            expected_end: mission.expected_end_time,
        });
        Ok(())
    }

    /// Stop tracking `id` and append its `Completed` entry.
    ///
    /// # Errors
    /// `UnknownMission` if `id` is not active (never opened, or already
    /// closed).  Nothing is appended in that case.
    pub fn close(&mut self, time: SimTime, id: MissionId) -> MissionResult<Mission> {
        let mission = self.active.remove(&id).ok_or(MissionError::UnknownMission(id))?;
        self.log.push(MissionLogEntry::Completed {
            time,
            mission: id,
            depot:   mission.depot,
            unit:    mission.unit,
        });
        Ok(mission)
    }

    /// Append a `Blocked` entry for an incident nobody could serve.
    pub fn record_blocked(&mut self, time: SimTime, zone: ZoneId) {
        self.log.push(MissionLogEntry::Blocked { time, zone });
    }

    /// Append a `HandlerError` entry for the event with `sequence`.
    pub fn record_handler_error(
        &mut self,
        time:     SimTime,
        sequence: u64,
        event:    impl Display,
        message:  impl Display,
    ) {
        self.log.push(MissionLogEntry::HandlerError {
            time,
            sequence,
            event:   event.to_string(),
            message: message.to_string(),
        });
    }

    pub fn get(&self, id: MissionId) -> Option<&Mission> {
        self.active.get(&id)
    }

    /// Open missions in id order.
    pub fn active(&self) -> impl Iterator<Item = &Mission> {
        self.active.values()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn log(&self) -> &MissionLog {
        &self.log
    }

    pub fn into_log(self) -> MissionLog {
        self.log
    }
}
