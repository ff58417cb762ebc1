//! `ems-mission`: mission lifecycle and the mission log.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`mission`]  | `Mission`: one unit's round trip                                |
//! | [`log`]      | `MissionLogEntry`, `MissionLog`: append-only audit trail        |
//! | [`tracker`]  | `MissionTracker`: active missions + the log                     |
//! | [`summary`]  | `LogSummary`: counts and served ratio over a log slice          |
//! | [`error`]    | `MissionError`, `MissionResult<T>`                               |
//!
//! # Mission lifecycle
//!
//! ```text
//! dispatch decision ──open()──▶ active ──close()──▶ Completed entry
//!                                  │
//!                                  └── run stopped first: stays active
//! ```
//!
//! Every transition appends exactly one entry to the log.  Entries are never
//! edited or removed, so the log doubles as the run's only externally
//! visible state.

pub mod error;
pub mod log;
pub mod mission;
pub mod summary;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use error::{MissionError, MissionResult};
pub use log::{MissionLog, MissionLogEntry};
pub use mission::Mission;
pub use summary::LogSummary;
pub use tracker::MissionTracker;
