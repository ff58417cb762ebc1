//! Homogeneous Poisson incident arrivals.
//!
//! Inter-arrival gaps are exponential with rate `λ`:
//!
//! ```text
//! t = 0
//! loop:
//!   u  ~ Uniform(0, 1]
//!   t += -ln(u) / λ
//!   if t >= horizon: stop
//!   emit (t, zone ~ Uniform{0 .. n_zones})
//! ```
//!
//! Zones are drawn uniformly.  Per-zone demand weights are deliberately not
//! applied here.

use ems_core::{EmsError, EmsResult, SimConfig, SimRng, SimTime, ZoneId};

use crate::{EventKind, EventQueue};

/// One incident: when it is reported and where.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrival {
    pub time: SimTime,
    pub zone: ZoneId,
}

/// Generator for the whole horizon's arrivals.
#[derive(Clone, Debug)]
pub struct ArrivalProcess {
    rate_per_min: f64,
    horizon:      SimTime,
    zone_count:   usize,
}

impl ArrivalProcess {
    /// # Errors
    /// `EmsError::Config` if the rate or horizon is not positive and finite,
    /// or if there are no zones to draw from.
    pub fn new(rate_per_min: f64, horizon_min: f64, zone_count: usize) -> EmsResult<Self> {
        if !(rate_per_min.is_finite() && rate_per_min > 0.0) {
            return Err(EmsError::Config(format!(
                "arrival rate must be positive and finite, got {rate_per_min}"
            )));
        }
        if !(horizon_min.is_finite() && horizon_min > 0.0) {
            return Err(EmsError::Config(format!(
                "horizon must be positive and finite, got {horizon_min}"
            )));
        }
        if zone_count == 0 {
            return Err(EmsError::Config("arrival process needs at least one zone".into()));
        }
        if u32::try_from(zone_count).is_err() {
            return Err(EmsError::Config(format!("{zone_count} zones exceed the ZoneId range")));
        }
        Ok(Self {
            rate_per_min,
            horizon: SimTime(horizon_min),
            zone_count,
        })
    }

    /// Arrival process for `config`'s rate and horizon over `zone_count` zones.
    pub fn from_config(config: &SimConfig, zone_count: usize) -> EmsResult<Self> {
        Self::new(config.arrival_rate_per_min, config.horizon_min, zone_count)
    }

    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    /// Draw every arrival in `[0, horizon)`, in ascending time order.
    pub fn generate(&self, rng: &mut SimRng) -> Vec<Arrival> {
        let mut arrivals = Vec::new();
        let mut t = 0.0;
        loop {
            t += rng.exponential(self.rate_per_min);
            if t >= self.horizon.0 {
                break;
            }
            let zone = ZoneId(rng.gen_range(0..self.zone_count as u32));
            arrivals.push(Arrival { time: SimTime(t), zone });
        }
        arrivals
    }
}

/// Push one `Arrival` event per entry, in slice order.
pub fn enqueue_arrivals(queue: &mut EventQueue, arrivals: &[Arrival]) {
    for a in arrivals {
        queue.push(a.time, EventKind::Arrival { zone: a.zone });
    }
}
