//! In-thread callbacks for progress reporting and log streaming.

use ems_mission::MissionLogEntry;
use ems_schedule::Event;

use crate::RunState;

/// Events processed so far out of the events known about.
///
/// `total` is `processed + still queued`, so it grows while completions are
/// being scheduled and equals `processed` once the queue is empty.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Progress {
    pub processed: u64,
    pub total:     u64,
}

impl Progress {
    /// `processed / total` in `[0, 1]`; `1.0` when there is nothing to do.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }
}

/// Callbacks invoked by [`Engine::run_with`][crate::Engine::run_with] on the
/// loop's own thread.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: stop after the first dispatch
///
/// ```rust,ignore
/// struct StopOnDispatch(RunControl);
///
/// impl SimObserver for StopOnDispatch {
///     fn on_entry(&mut self, entry: &MissionLogEntry) {
///         if matches!(entry, MissionLogEntry::Dispatched { .. }) {
///             self.0.stop();
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first checkpoint with the number of events
    /// already queued.
    fn on_start(&mut self, _queued: usize) {}

    /// Called after `event` has been handled (successfully or not).
    fn on_event(&mut self, _event: &Event) {}

    /// Called once per log entry appended while handling the last event.
    fn on_entry(&mut self, _entry: &MissionLogEntry) {}

    /// Called after every processed event.
    fn on_progress(&mut self, _progress: Progress) {}

    /// Called once when the loop exits.
    fn on_finish(&mut self, _state: RunState) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
