//! Unit tests for ems-dispatch.

use ems_core::{CoverageMatrix, DepotId, MissionId, SimTime, TimeMatrix, UnitId, ZoneId};

use crate::{DispatchContext, DispatchPolicy, NearestAvailable, ResourcePool};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Two zones, three depots.
///
/// zone 0: covered by depots 0 and 2 (travel 8, 3); depot 1 is closer but
///         does not cover.
/// zone 1: covered by depots 1 and 2 at the same travel time.
fn inputs() -> (CoverageMatrix, TimeMatrix) {
    let coverage = CoverageMatrix::from_rows(vec![
        vec![true, false, true],
        vec![false, true, true],
    ])
    .unwrap();
    let times = TimeMatrix::from_rows(vec![
        vec![8.0, 1.0, 3.0],
        vec![9.0, 4.0, 4.0],
    ])
    .unwrap();
    (coverage, times)
}

fn select(pool: &ResourcePool, zone: u32) -> Option<crate::Assignment> {
    let (coverage, times) = inputs();
    let ctx = DispatchContext::new(SimTime::ZERO, &coverage, &times, pool);
    NearestAvailable.select(ZoneId(zone), &ctx).unwrap()
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool {
    use crate::DispatchError;

    use super::*;

    #[test]
    fn new_pool_is_all_available() {
        let pool = ResourcePool::new(&[2, 0, 3]);
        assert_eq!(pool.depot_count(), 3);
        assert_eq!(pool.available_count(DepotId(0)), 2);
        assert_eq!(pool.available_count(DepotId(1)), 0);
        assert_eq!(pool.available_count(DepotId(2)), 3);
        assert_eq!(pool.available_count(DepotId(9)), 0);
        assert!(pool.is_consistent());
    }

    #[test]
    fn acquire_takes_first_available() {
        let mut pool = ResourcePool::new(&[3]);
        assert_eq!(pool.acquire(DepotId(0), MissionId(1)).unwrap(), UnitId(0));
        assert_eq!(pool.acquire(DepotId(0), MissionId(2)).unwrap(), UnitId(1));
        let depot = pool.depot(DepotId(0)).unwrap();
        assert_eq!(depot.available_count(), 1);
        assert_eq!(depot.busy_count(), 2);
        assert_eq!(depot.mission_of(UnitId(1)), Some(MissionId(2)));
        assert!(pool.is_consistent());
    }

    #[test]
    fn released_unit_goes_to_the_back() {
        let mut pool = ResourcePool::new(&[2]);
        let u0 = pool.acquire(DepotId(0), MissionId(1)).unwrap();
        pool.release(DepotId(0), u0, MissionId(1)).unwrap();
        // Unit 1 was waiting at the front; unit 0 is now behind it.
        assert_eq!(pool.acquire(DepotId(0), MissionId(2)).unwrap(), UnitId(1));
        assert_eq!(pool.acquire(DepotId(0), MissionId(3)).unwrap(), UnitId(0));
        assert!(pool.is_consistent());
    }

    #[test]
    fn exhausted_depot_errors_without_change() {
        let mut pool = ResourcePool::new(&[1]);
        pool.acquire(DepotId(0), MissionId(1)).unwrap();
        let err = pool.acquire(DepotId(0), MissionId(2)).unwrap_err();
        assert_eq!(err, DispatchError::NoUnitAvailable(DepotId(0)));
        assert_eq!(pool.depot(DepotId(0)).unwrap().busy_count(), 1);
        assert!(pool.is_consistent());
    }

    #[test]
    fn unknown_depot_errors() {
        let mut pool = ResourcePool::new(&[1]);
        assert_eq!(
            pool.acquire(DepotId(4), MissionId(1)).unwrap_err(),
            DispatchError::UnknownDepot(DepotId(4))
        );
        assert_eq!(
            pool.release(DepotId(4), UnitId(0), MissionId(1)).unwrap_err(),
            DispatchError::UnknownDepot(DepotId(4))
        );
    }

    #[test]
    fn release_of_idle_unit_errors() {
        let mut pool = ResourcePool::new(&[2]);
        let err = pool.release(DepotId(0), UnitId(1), MissionId(1)).unwrap_err();
        assert_eq!(err, DispatchError::UnitNotBusy { depot: DepotId(0), unit: UnitId(1) });
        assert_eq!(pool.available_count(DepotId(0)), 2);
        assert!(pool.is_consistent());
    }

    #[test]
    fn release_with_wrong_mission_errors() {
        let mut pool = ResourcePool::new(&[1]);
        let unit = pool.acquire(DepotId(0), MissionId(5)).unwrap();
        let err = pool.release(DepotId(0), unit, MissionId(6)).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MissionMismatch { expected: MissionId(6), found: MissionId(5), .. }
        ));
        assert_eq!(pool.depot(DepotId(0)).unwrap().mission_of(unit), Some(MissionId(5)));
    }
}

// ── AvailabilityBoard ─────────────────────────────────────────────────────────

#[cfg(test)]
mod board {
    use crate::{Availability, DepotStatus};

    use super::*;

    #[test]
    fn board_tracks_acquire_and_release() {
        let mut pool = ResourcePool::new(&[2, 1]);
        let board = pool.board();
        assert_eq!(board.depot_count(), 2);
        assert_eq!(
            board.snapshot(DepotId(0)),
            Some(Availability { available: 2, capacity: 2 })
        );

        let unit = pool.acquire(DepotId(0), MissionId(1)).unwrap();
        assert_eq!(board.snapshot(DepotId(0)).unwrap().available, 1);

        pool.release(DepotId(0), unit, MissionId(1)).unwrap();
        assert_eq!(board.snapshot(DepotId(0)).unwrap().available, 2);
        assert!(board.snapshot(DepotId(2)).is_none());
    }

    #[test]
    fn snapshot_all_matches_pool() {
        let mut pool = ResourcePool::new(&[3, 1]);
        pool.acquire(DepotId(1), MissionId(1)).unwrap();
        let all = pool.board().snapshot_all();
        assert_eq!(all[0].available, 3);
        assert_eq!(all[1].available, 0);
        assert_eq!(all[1].busy(), 1);
    }

    #[test]
    fn status_bands() {
        let a = |available, capacity| Availability { available, capacity }.status();
        assert_eq!(a(3, 3), DepotStatus::AllAvailable);
        assert_eq!(a(1, 3), DepotStatus::Partial);
        assert_eq!(a(0, 3), DepotStatus::Exhausted);
        assert_eq!(a(0, 0), DepotStatus::Exhausted);
    }

    #[test]
    fn board_is_readable_from_another_thread() {
        let mut pool = ResourcePool::new(&[2]);
        let board = pool.board();
        pool.acquire(DepotId(0), MissionId(1)).unwrap();
        let seen = std::thread::spawn(move || board.snapshot(DepotId(0)).unwrap().available)
            .join()
            .unwrap();
        assert_eq!(seen, 1);
    }
}

// ── NearestAvailable ──────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest_available {
    use crate::DispatchError;

    use super::*;

    #[test]
    fn picks_closest_covering_depot() {
        let pool = ResourcePool::new(&[1, 1, 1]);
        let a = select(&pool, 0).unwrap();
        // Depot 1 is closest (1.0) but does not cover zone 0.
        assert_eq!(a.depot, DepotId(2));
        assert_eq!(a.travel_time, 3.0);
    }

    #[test]
    fn skips_depot_without_free_units() {
        let mut pool = ResourcePool::new(&[1, 1, 1]);
        pool.acquire(DepotId(2), MissionId(1)).unwrap();
        let a = select(&pool, 0).unwrap();
        assert_eq!(a.depot, DepotId(0));
        assert_eq!(a.travel_time, 8.0);
    }

    #[test]
    fn tie_goes_to_lowest_index() {
        let pool = ResourcePool::new(&[1, 1, 1]);
        assert_eq!(select(&pool, 1).unwrap().depot, DepotId(1));
    }

    #[test]
    fn none_when_every_covering_depot_is_busy() {
        let mut pool = ResourcePool::new(&[1, 5, 1]);
        pool.acquire(DepotId(0), MissionId(1)).unwrap();
        pool.acquire(DepotId(2), MissionId(2)).unwrap();
        // Depot 1 still has units but does not cover zone 0.
        assert!(select(&pool, 0).is_none());
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let (coverage, times) = inputs();
        let pool = ResourcePool::new(&[1, 1, 1]);
        let ctx = DispatchContext::new(SimTime::ZERO, &coverage, &times, &pool);
        let err = NearestAvailable.select(ZoneId(7), &ctx).unwrap_err();
        assert_eq!(err, DispatchError::Core(ems_core::EmsError::UnknownZone(ZoneId(7))));
    }

    #[test]
    fn return_time_is_round_trip_plus_service() {
        let a = crate::Assignment { depot: DepotId(0), travel_time: 4.0 };
        assert_eq!(a.return_time(SimTime(10.0), 12.0), SimTime(30.0));
    }
}

// ── ServiceTime ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod service_time {
    use ems_core::SimRng;

    use crate::ServiceTime;

    #[test]
    fn rejects_non_positive_mean() {
        assert!(ServiceTime::new(0.0).is_err());
        assert!(ServiceTime::new(-3.0).is_err());
        assert!(ServiceTime::new(f64::NAN).is_err());
    }

    #[test]
    fn samples_are_positive_with_the_right_mean() {
        let s = ServiceTime::new(20.0).unwrap();
        let mut rng = SimRng::new(5);
        let n = 40_000;
        let draws: Vec<f64> = (0..n).map(|_| s.sample(&mut rng)).collect();
        assert!(draws.iter().all(|&d| d >= 0.0));
        let mean = draws.iter().sum::<f64>() / n as f64;
        assert!((mean - 20.0).abs() < 0.6, "mean {mean}");
    }
}
