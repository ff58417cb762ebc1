use ems_core::MissionId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MissionError {
    #[error("{0} is not an active mission")]
    UnknownMission(MissionId),

    #[error("{0} is already active")]
    DuplicateMission(MissionId),
}

pub type MissionResult<T> = Result<T, MissionError>;
