//! Unit tests for ems-mission.

use ems_core::{DepotId, MissionId, SimTime, UnitId, ZoneId};

use crate::{LogSummary, Mission, MissionError, MissionLogEntry, MissionTracker};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mission(id: MissionId, start: f64, end: f64) -> Mission {
    Mission {
        id,
        zone:              ZoneId(2),
        depot:             DepotId(1),
        unit:              UnitId(0),
        start_time:        SimTime(start),
        expected_end_time: SimTime(end),
    }
}

// ── MissionTracker ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tracker {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut t = MissionTracker::new();
        assert_eq!(t.allocate_id(), MissionId(1));
        assert_eq!(t.allocate_id(), MissionId(2));
    }

    #[test]
    fn open_appends_dispatched() {
        let mut t = MissionTracker::new();
        let id = t.allocate_id();
        t.open(mission(id, 1.0, 31.0)).unwrap();

        assert_eq!(t.active_count(), 1);
        assert_eq!(t.get(id).unwrap().duration(), 30.0);
        assert_eq!(
            t.log().entries(),
            &[MissionLogEntry::Dispatched {
                time:         SimTime(1.0),
                zone:         ZoneId(2),
                depot:        DepotId(1),
                unit:         UnitId(0),
                mission:      id,
                expected_end: SimTime(31.0),
            }]
        );
    }

    #[test]
    fn close_appends_completed_and_forgets_mission() {
        let mut t = MissionTracker::new();
        let id = t.allocate_id();
        t.open(mission(id, 0.0, 10.0)).unwrap();
        let closed = t.close(SimTime(10.0), id).unwrap();

        assert_eq!(closed.id, id);
        assert_eq!(t.active_count(), 0);
        assert_eq!(
            t.log().last(),
            Some(&MissionLogEntry::Completed {
                time:    SimTime(10.0),
                mission: id,
                depot:   DepotId(1),
                unit:    UnitId(0),
            })
        );
    }

    #[test]
    fn closing_twice_errors_and_appends_nothing() {
        let mut t = MissionTracker::new();
        let id = t.allocate_id();
        t.open(mission(id, 0.0, 10.0)).unwrap();
        t.close(SimTime(10.0), id).unwrap();
        let len = t.log().len();

        assert_eq!(t.close(SimTime(11.0), id).unwrap_err(), MissionError::UnknownMission(id));
        assert_eq!(t.log().len(), len);
    }

    #[test]
    fn duplicate_open_rejected() {
        let mut t = MissionTracker::new();
        t.open(mission(MissionId(1), 0.0, 5.0)).unwrap();
        let err = t.open(mission(MissionId(1), 1.0, 6.0)).unwrap_err();
        assert_eq!(err, MissionError::DuplicateMission(MissionId(1)));
        assert_eq!(t.log().len(), 1);
    }

    #[test]
    fn blocked_and_errors_do_not_touch_active() {
        let mut t = MissionTracker::new();
        t.record_blocked(SimTime(2.0), ZoneId(0));
        t.record_handler_error(SimTime(3.0), 17, "arrival in ZoneId(9)", "boom");
        assert_eq!(t.active_count(), 0);
        assert_eq!(t.log().len(), 2);
        assert_eq!(
            t.log().entries()[1],
            MissionLogEntry::HandlerError {
                time:     SimTime(3.0),
                sequence: 17,
                event:    "arrival in ZoneId(9)".into(),
                message:  "boom".into(),
            }
        );
    }

    #[test]
    fn log_since() {
        let mut t = MissionTracker::new();
        t.record_blocked(SimTime(1.0), ZoneId(0));
        t.record_blocked(SimTime(2.0), ZoneId(1));
        assert_eq!(t.log().since(1).len(), 1);
        assert!(t.log().since(2).is_empty());
        assert!(t.log().since(10).is_empty());
    }
}

// ── MissionLogEntry ───────────────────────────────────────────────────────────

#[cfg(test)]
mod entry {
    use super::*;

    #[test]
    fn accessors() {
        let e = MissionLogEntry::Completed {
            time:    SimTime(4.0),
            mission: MissionId(3),
            depot:   DepotId(0),
            unit:    UnitId(1),
        };
        assert_eq!(e.time(), SimTime(4.0));
        assert_eq!(e.mission(), Some(MissionId(3)));
        assert_eq!(e.label(), "completed");

        let b = MissionLogEntry::Blocked { time: SimTime(1.0), zone: ZoneId(0) };
        assert_eq!(b.mission(), None);
        assert_eq!(b.label(), "blocked");
    }

    #[test]
    fn display() {
        let b = MissionLogEntry::Blocked { time: SimTime(1.0), zone: ZoneId(4) };
        assert_eq!(b.to_string(), "t=1.000min blocked ZoneId(4)");
    }
}

// ── LogSummary ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use super::*;

    #[test]
    fn empty_log() {
        let s = LogSummary::from_entries(&MissionTracker::new().into_log());
        assert_eq!(s, LogSummary::default());
        assert_eq!(s.served_ratio(), None);
    }

    #[test]
    fn counts_and_open_missions() {
        let mut t = MissionTracker::new();
        let a = t.allocate_id();
        let b = t.allocate_id();
        t.open(mission(a, 0.0, 10.0)).unwrap();
        t.open(mission(b, 1.0, 20.0)).unwrap();
        t.record_blocked(SimTime(2.0), ZoneId(0));
        t.close(SimTime(10.0), a).unwrap();
        t.record_handler_error(SimTime(11.0), 9, "x", "y");

        let s = LogSummary::from_entries(t.log());
        assert_eq!(s.arrivals, 3);
        assert_eq!(s.dispatched, 2);
        assert_eq!(s.blocked, 1);
        assert_eq!(s.completed, 1);
        assert_eq!(s.open, 1);
        assert_eq!(s.handler_errors, 1);
        assert!((s.served_ratio().unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }
}
