//! Cooperative pause/stop signalling between callers and the event loop.
//!
//! The loop calls [`RunControl::checkpoint`] once per iteration, before it
//! pops the next event.  That is the only place pause and stop take effect,
//! so a handler is never interrupted half-way.
//!
//! Flags and the published [`RunState`] live behind one `Mutex`; a single
//! `Condvar` wakes the paused loop on resume/stop and wakes callers waiting
//! for a state change.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Where a run is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    /// Queue populated, clock at zero, loop not entered yet.
    #[default]
    Idle,
    Running,
    /// Suspended between two events.
    Paused,
    /// Left early on request; pending events were not processed.
    Stopped,
    /// The queue ran dry.
    Finished,
}

impl RunState {
    /// `Stopped` or `Finished`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Stopped | RunState::Finished)
    }
}

/// Decision returned by [`RunControl::checkpoint`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Checkpoint {
    Proceed,
    Stop,
}

#[derive(Default)]
struct Flags {
    paused: bool,
    stop:   bool,
    state:  RunState,
}

#[derive(Default)]
struct Shared {
    flags:   Mutex<Flags>,
    changed: Condvar,
}

/// Cloneable handle shared by the loop and any number of controllers.
#[derive(Clone, Default)]
pub struct RunControl {
    shared: Arc<Shared>,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave `Flags` half-written, so a
    // poisoned mutex is still safe to use.
    fn flags(&self) -> MutexGuard<'_, Flags> {
        self.shared.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ask the loop to suspend at its next checkpoint.
    pub fn pause(&self) {
        self.flags().paused = true;
        self.shared.changed.notify_all();
    }

    /// Let a paused loop continue from exactly where it stopped.
    pub fn resume(&self) {
        self.flags().paused = false;
        self.shared.changed.notify_all();
    }

    /// Ask the loop to exit at its next checkpoint.  Also ends a pause.
    pub fn stop(&self) {
        self.flags().stop = true;
        self.shared.changed.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        self.flags().paused
    }

    pub fn is_stop_requested(&self) -> bool {
        self.flags().stop
    }

    pub fn state(&self) -> RunState {
        self.flags().state
    }

    pub(crate) fn set_state(&self, state: RunState) {
        self.flags().state = state;
        self.shared.changed.notify_all();
    }

    /// Called by the loop between events.
    ///
    /// Blocks without spinning while paused.  Returns `Stop` once a stop has
    /// been requested, otherwise marks the run `Running` and returns
    /// `Proceed`.
    ///
    /// A pause requested before the first event moves the state straight
    /// from `Idle` to `Paused`; `Running` is entered on resume.
    pub fn checkpoint(&self) -> Checkpoint {
        let mut flags = self.flags();
        if flags.paused && !flags.stop {
            flags.state = RunState::Paused;
            self.shared.changed.notify_all();
            log::info!("simulation paused");
            flags = self
                .shared
                .changed
                .wait_while(flags, |f| f.paused && !f.stop)
                .unwrap_or_else(PoisonError::into_inner);
            if !flags.stop {
                log::info!("simulation resumed");
            }
        }
        if flags.stop {
            return Checkpoint::Stop;
        }
        if flags.state != RunState::Running {
            flags.state = RunState::Running;
            self.shared.changed.notify_all();
        }
        Checkpoint::Proceed
    }

    /// Sleep for `delay` of wall-clock time, returning early on stop.
    pub fn pace(&self, delay: Duration) {
        let flags = self.flags();
        let _unused = self
            .shared
            .changed
            .wait_timeout_while(flags, delay, |f| !f.stop)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Block until `accept(state)` holds or `timeout` elapses; returns the
    /// last state seen.
    pub fn wait_for(&self, timeout: Duration, accept: impl Fn(RunState) -> bool) -> RunState {
        let deadline = Instant::now() + timeout;
        let mut flags = self.flags();
        while !accept(flags.state) {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            flags = self
                .shared
                .changed
                .wait_timeout(flags, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
        flags.state
    }
}
