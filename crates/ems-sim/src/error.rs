use ems_core::{DepotId, EmsError, ZoneId};
use ems_dispatch::DispatchError;
use ems_mission::MissionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected before the run: bad parameters, matrices, fleet or arrivals.
    #[error("simulation configuration error: {0}")]
    Config(EmsError),

    #[error(transparent)]
    Core(#[from] EmsError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("mission error: {0}")]
    Mission(#[from] MissionError),

    #[error("policy assigned {depot}, which does not cover {zone}")]
    UncoveredAssignment { zone: ZoneId, depot: DepotId },

    #[error("simulation already started")]
    AlreadyStarted,

    #[error("simulation not started")]
    NotStarted,

    #[error("simulation worker thread panicked")]
    WorkerPanicked,

    #[error("could not spawn simulation worker: {0}")]
    Spawn(#[from] std::io::Error),
}

impl SimError {
    /// `true` for errors raised by the builder before any time advanced.
    pub fn is_config(&self) -> bool {
        matches!(self, SimError::Config(_))
    }
}

pub type SimResult<T> = Result<T, SimError>;
