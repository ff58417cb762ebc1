//! Core error type.
//!
//! Everything here is a configuration problem except `ClockRegression`,
//! which the engine treats as a per-event handler error.

use thiserror::Error;

use crate::{DepotId, ZoneId};

/// The top-level error type for `ems-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} has {got} {axis}, expected {expected}")]
    DimensionMismatch {
        what:     &'static str,
        axis:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("time matrix entry for {zone}, {depot} is {value}; travel times must be finite and non-negative")]
    InvalidTravelTime {
        zone:  ZoneId,
        depot: DepotId,
        value: f64,
    },

    #[error("{0} is outside the coverage matrix")]
    UnknownZone(ZoneId),

    #[error("{0} is outside the coverage matrix")]
    UnknownDepot(DepotId),

    #[error("clock cannot move backwards from {now} to {to}")]
    ClockRegression { now: f64, to: f64 },
}

/// Shorthand result type for all `ems-*` crates.
pub type EmsResult<T> = Result<T, EmsError>;
