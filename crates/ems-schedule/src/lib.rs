//! `ems-schedule`: pending events and where they come from.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`event`]    | `Event`, `EventKind` (`Arrival` / `Completion`)           |
//! | [`queue`]    | `EventQueue` (`BinaryHeap` keyed on `(time, sequence)`)   |
//! | [`arrival`]  | `Arrival`, `ArrivalProcess`, `enqueue_arrivals`           |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key(event)  = (time, sequence)
//! sequence    = queue-local counter, +1 per push
//! pop()       = event with the smallest key
//! ```
//!
//! Equal timestamps are therefore processed in push order, whatever the heap
//! does internally.  Arrivals for the whole horizon are pushed before the
//! run starts; completions are pushed while the run drains the queue.

pub mod arrival;
pub mod event;
pub mod queue;


pub use arrival::{Arrival, ArrivalProcess, enqueue_arrivals};
pub use event::{Event, EventKind};
pub use queue::EventQueue;
