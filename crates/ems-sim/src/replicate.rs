//! Independent replications of one scenario over a list of seeds.
//!
//! Each seed gets its own engine, so replications share nothing and can run
//! on Rayon's thread pool with the `parallel` feature.  Results come back in
//! seed order either way.

use ems_core::SimTime;
use ems_dispatch::DispatchPolicy;
use ems_mission::LogSummary;

use crate::{Engine, SimResult};

/// Outcome of one finished replication.
#[derive(Debug, Clone, PartialEq)]
pub struct Replication {
    pub seed:       u64,
    pub summary:    LogSummary,
    pub final_time: SimTime,
}

/// Build an engine per seed with `make`, run each to completion and
/// summarise its log.
///
/// # Errors
/// The first build error in seed order.
pub fn run_replications<P, F>(seeds: &[u64], make: F) -> SimResult<Vec<Replication>>
where
    P: DispatchPolicy,
    F: Fn(u64) -> SimResult<Engine<P>> + Sync + Send,
{
    let run_one = |&seed: &u64| -> SimResult<Replication> {
        let report = make(seed)?.run_to_end();
        log::debug!("replication seed {seed}: {} events", report.processed);
        Ok(Replication { seed, summary: report.summary(), final_time: report.final_time })
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(run_one).collect()
    }
}
