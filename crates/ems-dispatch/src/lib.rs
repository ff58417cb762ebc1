//! `ems-dispatch`: who is free, and who goes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`pool`]    | `Depot`, `ResourcePool`: available vs. busy units per depot    |
//! | [`board`]   | `AvailabilityBoard`, `Availability`, `DepotStatus`              |
//! | [`context`] | `DispatchContext<'a>`: read-only view passed to the policy     |
//! | [`policy`]  | `DispatchPolicy` trait, `Assignment`, `NearestAvailable`        |
//! | [`service`] | `ServiceTime`: exponential on-scene duration sampler          |
//! | [`error`]   | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Design notes
//!
//! Dispatch is split into a decision and an application:
//!
//! 1. **Decide**: the policy reads coverage, travel times and pool counts
//!    through `&DispatchContext` and returns at most one `Assignment`.
//!    It never mutates anything.
//!
//! 2. **Apply**: the engine acquires a unit from the chosen depot, samples the
//!    service time and schedules the completion.
//!
//! Because of this split a policy only needs to be `Send + Sync`; the pool is
//! owned by whoever runs the event loop.

pub mod board;
pub mod context;
pub mod error;
pub mod policy;
pub mod pool;
pub mod service;

#[cfg(test)]
mod tests;

pub use board::{Availability, AvailabilityBoard, DepotStatus};
pub use context::DispatchContext;
pub use error::{DispatchError, DispatchResult};
pub use policy::{Assignment, DispatchPolicy, NearestAvailable};
pub use pool::{Depot, ResourcePool};
pub use service::ServiceTime;
