//! Fluent builder for constructing an [`Engine`].

use ems_core::rng::{ARRIVAL_STREAM, SERVICE_STREAM};
use ems_core::{CoverageMatrix, EmsError, SimClock, SimConfig, SimRng, TimeMatrix};
use ems_dispatch::{DispatchPolicy, ResourcePool, ServiceTime};
use ems_mission::MissionTracker;
use ems_schedule::{Arrival, ArrivalProcess, EventQueue, enqueue_arrivals};

use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: arrival rate, horizon, mean service time, seed
/// - [`CoverageMatrix`] and [`TimeMatrix`], both `zones × depots`
/// - the fleet: units per depot, one entry per depot column
/// - `P: DispatchPolicy`, e.g. [`ems_dispatch::NearestAvailable`]
///
/// # Optional inputs
///
/// | Method                    | Default                                   |
/// |---------------------------|-------------------------------------------|
/// | `.scripted_arrivals(v)`   | Poisson arrivals drawn from `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(config, coverage, times, vec![2, 1], NearestAvailable)
///     .build()?;
/// let report = engine.run_to_end();
/// ```
pub struct EngineBuilder<P: DispatchPolicy> {
    config:   SimConfig,
    coverage: CoverageMatrix,
    times:    TimeMatrix,
    fleet:    Vec<u32>,
    policy:   P,
    scripted: Option<Vec<Arrival>>,
}

impl<P: DispatchPolicy> EngineBuilder<P> {
    pub fn new(
        config:   SimConfig,
        coverage: CoverageMatrix,
        times:    TimeMatrix,
        fleet:    Vec<u32>,
        policy:   P,
    ) -> Self {
        Self { config, coverage, times, fleet, policy, scripted: None }
    }

    /// Replace the Poisson draw with a fixed list of incidents.
    ///
    /// Each arrival must fall in `[0, horizon)` and name an existing zone.
    /// Order does not matter; equal times are processed in list order.
    /// Service times are still drawn from the seeded service stream.
    pub fn scripted_arrivals(mut self, arrivals: Vec<Arrival>) -> Self {
        self.scripted = Some(arrivals);
        self
    }

    /// Validate every input, fill the event queue and return an `Idle`
    /// engine with its clock at zero.
    ///
    /// # Errors
    /// [`SimError::Config`] for bad parameters, mismatched matrix or fleet
    /// dimensions, an empty zone set, or an out-of-range scripted arrival.
    pub fn build(self) -> SimResult<Engine<P>> {
        self.validate().map_err(SimError::Config)?;

        let zones = self.coverage.zone_count();
        let service = ServiceTime::new(self.config.mean_service_min).map_err(SimError::Config)?;
        let process = ArrivalProcess::from_config(&self.config, zones).map_err(SimError::Config)?;

        // Streams are split off in a fixed order so a seed always maps to the
        // same arrivals and the same service times.
        let mut root = SimRng::new(self.config.seed);
        let mut arrival_rng = root.child(ARRIVAL_STREAM);
        let service_rng = root.child(SERVICE_STREAM);

        let arrivals = match self.scripted {
            Some(scripted) => scripted,
            None => process.generate(&mut arrival_rng),
        };
        let mut queue = EventQueue::new();
        enqueue_arrivals(&mut queue, &arrivals);

        log::info!(
            "built engine: {zones} zones, {} depots, {} units, {} arrivals over {:.0} min, mean service {:.1} min (seed {})",
            self.fleet.len(),
            self.fleet.iter().map(|&n| u64::from(n)).sum::<u64>(),
            arrivals.len(),
            self.config.horizon_min,
            service.mean(),
            self.config.seed
        );

        Ok(Engine {
            clock: SimClock::new(),
            queue,
            pool: ResourcePool::new(&self.fleet),
            tracker: MissionTracker::new(),
            coverage: self.coverage,
            times: self.times,
            policy: self.policy,
            service,
            service_rng,
            arrivals: arrivals.len(),
            processed: 0,
            config: self.config,
        })
    }

    fn validate(&self) -> Result<(), EmsError> {
        self.config.validate()?;

        let zones = self.coverage.zone_count();
        let depots = self.coverage.depot_count();
        if zones == 0 {
            return Err(EmsError::Config("at least one demand zone is required".into()));
        }
        if depots == 0 {
            return Err(EmsError::Config("at least one depot is required".into()));
        }
        if self.times.zone_count() != zones {
            return Err(EmsError::DimensionMismatch {
                what:     "time matrix",
                axis:     "zones",
                expected: zones,
                got:      self.times.zone_count(),
            });
        }
        if self.times.depot_count() != depots {
            return Err(EmsError::DimensionMismatch {
                what:     "time matrix",
                axis:     "depots",
                expected: depots,
                got:      self.times.depot_count(),
            });
        }
        if self.fleet.len() != depots {
            return Err(EmsError::DimensionMismatch {
                what:     "fleet",
                axis:     "depots",
                expected: depots,
                got:      self.fleet.len(),
            });
        }

        if let Some(scripted) = &self.scripted {
            let horizon = self.config.horizon_min;
            for a in scripted {
                if !(a.time.0.is_finite() && a.time.0 >= 0.0 && a.time.0 < horizon) {
                    return Err(EmsError::Config(format!(
                        "scripted arrival at {} is outside [0, {horizon})",
                        a.time
                    )));
                }
                if a.zone.index() >= zones {
                    return Err(EmsError::UnknownZone(a.zone));
                }
            }
        }
        Ok(())
    }
}
