//! `ems-core`: foundational types for the `ems` dispatch simulator.
//!
//! This crate is a dependency of every other `ems-*` crate.  It has no `ems-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ZoneId`, `DepotId`, `UnitId`, `MissionId`            |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`rng`]         | `SimRng` and its stream constants                     |
//! | [`matrix`]      | `CoverageMatrix`, `TimeMatrix`                        |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `EmsError`, `EmsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod matrix;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{EmsError, EmsResult};
pub use ids::{DepotId, MissionId, UnitId, ZoneId};
pub use matrix::{CoverageMatrix, TimeMatrix};
pub use rng::SimRng;
pub use time::{SimClock, SimTime};
