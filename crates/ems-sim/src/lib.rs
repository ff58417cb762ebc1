//! `ems-sim`: discrete-event loop and run controller for the ems dispatch
//! simulator.
//!
//! # Event loop
//!
//! ```text
//! build: draw every arrival in [0, horizon) and queue it
//! loop:
//!   ① Checkpoint: honour pause (block) or stop (exit) between events.
//!   ② Pop       : earliest (time, sequence) event; empty queue → Finished.
//!   ③ Advance   : clock := event.time (never backwards).
//!   ④ Handle    : Arrival:    policy picks a covering depot with a free
//!                               unit → Dispatched + Completion queued at
//!                               now + travel + service + travel;
//!                               none → Blocked.
//!                  Completion: unit back to its depot → Completed.
//!                  A failing handler appends HandlerError and the loop
//!                  continues.
//!   ⑤ Report    : observer callbacks (event, new log entries, progress).
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`builder`]     | `EngineBuilder`: validation, RNG streams, arrivals     |
//! | [`engine`]      | `Engine<P>`, `RunReport`                                |
//! | [`control`]     | `RunControl`, `RunState`: cooperative pause/stop       |
//! | [`observer`]    | `SimObserver`, `Progress`                               |
//! | [`controller`]  | `SimulationController`: worker thread + channel        |
//! | [`replicate`]   | `run_replications` over a seed list                     |
//! | [`error`]       | `SimError`, `SimResult<T>`                              |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs replications on Rayon's thread pool.              |
//! | `serde`    | Serde derives on ids, times, arrivals and log entries. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ems_core::{CoverageMatrix, SimConfig, TimeMatrix};
//! use ems_dispatch::NearestAvailable;
//! use ems_sim::EngineBuilder;
//!
//! let coverage = CoverageMatrix::full(3, 2);
//! let times = TimeMatrix::uniform(3, 2, 5.0)?;
//! let report = EngineBuilder::new(SimConfig::default(), coverage, times, vec![2, 2], NearestAvailable)
//!     .build()?
//!     .run_to_end();
//! println!("{:?}", report.summary());
//! ```

pub mod builder;
pub mod control;
pub mod controller;
pub mod engine;
pub mod error;
pub mod observer;
pub mod replicate;


pub use builder::EngineBuilder;
pub use control::{Checkpoint, RunControl, RunState};
pub use controller::{SimNotification, SimulationController};
pub use engine::{Engine, RunReport};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, Progress, SimObserver};
pub use replicate::{Replication, run_replications};
