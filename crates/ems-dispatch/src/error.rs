use ems_core::{DepotId, EmsError, MissionId, UnitId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error("{0} does not exist in the resource pool")]
    UnknownDepot(DepotId),

    #[error("{0} has no available unit")]
    NoUnitAvailable(DepotId),

    #[error("{unit} of {depot} is not on a mission")]
    UnitNotBusy { depot: DepotId, unit: UnitId },

    #[error("{unit} of {depot} is on {found}, not {expected}")]
    MissionMismatch {
        depot:    DepotId,
        unit:     UnitId,
        expected: MissionId,
        found:    MissionId,
    },

    #[error(transparent)]
    Core(#[from] EmsError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
