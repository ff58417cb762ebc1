//! Unit tests for ems-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DepotId, MissionId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = ZoneId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ZoneId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(DepotId(0) < DepotId(1));
        assert!(MissionId(100) > MissionId(99));
    }

    #[test]
    fn display() {
        assert_eq!(DepotId(7).to_string(), "DepotId(7)");
        assert_eq!(MissionId(3).to_string(), "MissionId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{EmsError, SimClock, SimTime};

    #[test]
    fn clock_starts_at_zero() {
        assert_eq!(SimClock::new().now(), SimTime::ZERO);
    }

    #[test]
    fn advance_forward_and_equal() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(3.5)).unwrap();
        clock.advance_to(SimTime(3.5)).unwrap();
        assert_eq!(clock.now(), SimTime(3.5));
    }

    #[test]
    fn advance_backwards_rejected() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(10.0)).unwrap();
        let err = clock.advance_to(SimTime(9.0)).unwrap_err();
        assert_eq!(err, EmsError::ClockRegression { now: 10.0, to: 9.0 });
        assert_eq!(clock.now(), SimTime(10.0), "failed advance must not move the clock");
    }

    #[test]
    fn nan_rejected() {
        let mut clock = SimClock::new();
        assert!(clock.advance_to(SimTime(f64::NAN)).is_err());
    }

    #[test]
    fn add_and_sub() {
        let t = SimTime(2.0) + 3.0;
        assert_eq!(t, SimTime(5.0));
        assert_eq!(t - SimTime(1.5), 3.5);
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(125.5)).unwrap();
        assert_eq!(clock.to_string(), "t=125.500min (2h05.50)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;
    use crate::rng::{ARRIVAL_STREAM, SERVICE_STREAM};

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn children_are_reproducible_and_distinct() {
        let mut root_a = SimRng::new(1);
        let mut root_b = SimRng::new(1);
        let mut arr_a = root_a.child(ARRIVAL_STREAM);
        let mut arr_b = root_b.child(ARRIVAL_STREAM);
        let mut svc_a = root_a.child(SERVICE_STREAM);
        assert_eq!(arr_a.random::<u64>(), arr_b.random::<u64>());
        assert_ne!(arr_a.random::<u64>(), svc_a.random::<u64>());
    }

    #[test]
    fn unit_open_excludes_zero() {
        let mut rng = SimRng::new(3);
        for _ in 0..10_000 {
            let u = rng.unit_open();
            assert!(u > 0.0 && u <= 1.0, "got {u}");
        }
    }

    #[test]
    fn exponential_mean_is_close() {
        let mut rng = SimRng::new(11);
        let n = 50_000;
        let rate = 0.05; // mean 20
        let mean: f64 = (0..n).map(|_| rng.exponential(rate)).sum::<f64>() / n as f64;
        assert!((mean - 20.0).abs() < 0.5, "mean {mean}");
    }
}

#[cfg(test)]
mod matrix {
    use crate::{CoverageMatrix, DepotId, EmsError, TimeMatrix, ZoneId};

    #[test]
    fn coverage_from_rows() {
        let m = CoverageMatrix::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(m.zone_count(), 2);
        assert_eq!(m.depot_count(), 2);
        assert_eq!(m.covers(ZoneId(0), DepotId(0)), Some(true));
        assert_eq!(m.covers(ZoneId(0), DepotId(1)), Some(false));
        assert_eq!(m.row(ZoneId(1)), Some(&[false, true][..]));
    }

    #[test]
    fn out_of_range_is_none() {
        let m = CoverageMatrix::full(2, 3);
        assert_eq!(m.covers(ZoneId(2), DepotId(0)), None);
        assert_eq!(m.covers(ZoneId(0), DepotId(3)), None);
        assert!(m.row(ZoneId(5)).is_none());
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = CoverageMatrix::from_rows(vec![vec![true, true], vec![true]]).unwrap_err();
        assert!(matches!(err, EmsError::DimensionMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn flat_length_checked() {
        assert!(TimeMatrix::new(2, 2, vec![1.0; 3]).is_err());
        assert!(TimeMatrix::new(2, 2, vec![1.0; 4]).is_ok());
    }

    #[test]
    fn negative_travel_time_rejected() {
        let err = TimeMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, -1.0]]).unwrap_err();
        assert!(matches!(
            err,
            EmsError::InvalidTravelTime { zone: ZoneId(1), depot: DepotId(1), .. }
        ));
    }

    #[test]
    fn nan_travel_time_rejected() {
        assert!(TimeMatrix::uniform(1, 1, f64::NAN).is_err());
    }

    #[test]
    fn travel_time_lookup() {
        let m = TimeMatrix::from_rows(vec![vec![4.0, 9.5]]).unwrap();
        assert_eq!(m.travel_time(ZoneId(0), DepotId(1)), Some(9.5));
        assert_eq!(m.travel_time(ZoneId(1), DepotId(0)), None);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn hourly_rate_converts() {
        let c = SimConfig::default().with_hourly_rate(30.0);
        assert!((c.arrival_rate_per_min - 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_positive_values_rejected() {
        let mut c = SimConfig::default();
        c.arrival_rate_per_min = 0.0;
        assert!(c.validate().is_err());

        let mut c = SimConfig::default();
        c.horizon_min = -5.0;
        assert!(c.validate().is_err());

        let mut c = SimConfig::default();
        c.mean_service_min = f64::INFINITY;
        assert!(c.validate().is_err());
    }
}
