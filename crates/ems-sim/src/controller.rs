//! Run an [`Engine`] on a worker thread and steer it from the caller's.
//!
//! ```text
//!  caller thread                       worker thread ("ems-sim")
//!  ─────────────                       ─────────────────────────
//!  start() ──spawn──────────────────▶  engine.run_with(control, ChannelObserver)
//!  pause()/resume()/stop() ─control─▶    checkpoint() between events
//!  availability() ◀──AvailabilityBoard── pool publishes on every acquire/release
//!  rx.recv() ◀──────mpsc────────────── Entry / Progress / Finished
//!  join() ◀─────────JoinHandle──────── RunReport
//! ```
//!
//! The engine is moved into the worker; callers never hold a reference to
//! it while it runs.  Everything they can observe goes through the control
//! handle, the availability board or the notification channel.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ems_core::DepotId;
use ems_dispatch::{Availability, AvailabilityBoard, DispatchPolicy};
use ems_mission::MissionLogEntry;

use crate::{Engine, Progress, RunControl, RunReport, RunState, SimError, SimObserver, SimResult};

/// Message sent from the worker to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SimNotification {
    /// A log entry, in append order.
    Entry(MissionLogEntry),
    /// Sent after every processed event.
    Progress(Progress),
    /// Last message of the run.
    Finished(RunState),
}

/// Forwards observer callbacks over a channel and applies wall-clock pacing.
struct ChannelObserver {
    tx:      Sender<SimNotification>,
    control: RunControl,
    pacing:  Option<Duration>,
}

impl ChannelObserver {
    // A dropped receiver only means nobody is listening any more.
    fn send(&self, note: SimNotification) {
        let _ = self.tx.send(note);
    }
}

impl SimObserver for ChannelObserver {
    fn on_entry(&mut self, entry: &MissionLogEntry) {
        self.send(SimNotification::Entry(entry.clone()));
    }

    fn on_progress(&mut self, progress: Progress) {
        self.send(SimNotification::Progress(progress));
        if let Some(delay) = self.pacing {
            self.control.pace(delay);
        }
    }

    fn on_finish(&mut self, state: RunState) {
        self.send(SimNotification::Finished(state));
    }
}

/// Owns a built engine until [`start`](Self::start), then the worker that
/// runs it.
pub struct SimulationController<P: DispatchPolicy> {
    control: RunControl,
    board:   Arc<AvailabilityBoard>,
    engine:  Option<Engine<P>>,
    worker:  Option<JoinHandle<RunReport>>,
    pacing:  Option<Duration>,
}

impl<P: DispatchPolicy> SimulationController<P> {
    pub fn new(engine: Engine<P>) -> Self {
        Self {
            control: RunControl::new(),
            board:   engine.board(),
            engine:  Some(engine),
            worker:  None,
            pacing:  None,
        }
    }

    /// Sleep `delay` of wall-clock time after each event so a viewer can
    /// follow along.  Pacing never changes simulated results, and a stop
    /// cuts the current sleep short.
    pub fn with_pacing(mut self, delay: Duration) -> Self {
        self.pacing = Some(delay);
        self
    }

    /// Spawn the worker and return the notification stream.
    ///
    /// A pause requested before `start` takes effect before the first event.
    ///
    /// # Errors
    /// `AlreadyStarted` on a second call; `Spawn` if the OS refuses a thread.
    pub fn start(&mut self) -> SimResult<Receiver<SimNotification>> {
        let mut engine = self.engine.take().ok_or(SimError::AlreadyStarted)?;
        let (tx, rx) = mpsc::channel();
        let control = self.control.clone();
        let mut observer = ChannelObserver { tx, control: control.clone(), pacing: self.pacing };

        let handle = thread::Builder::new()
            .name("ems-sim".into())
            .spawn(move || {
                let state = engine.run_with(&control, &mut observer);
                engine.into_report(state)
            })?;
        self.worker = Some(handle);
        Ok(rx)
    }

    pub fn pause(&self) {
        self.control.pause();
    }

    pub fn resume(&self) {
        self.control.resume();
    }

    pub fn stop(&self) {
        self.control.stop();
    }

    pub fn state(&self) -> RunState {
        self.control.state()
    }

    /// The shared control handle, e.g. for [`RunControl::wait_for`].
    pub fn control(&self) -> &RunControl {
        &self.control
    }

    /// Live free/total units at `depot`; safe to call while the run is going.
    pub fn availability(&self, depot: DepotId) -> Option<Availability> {
        self.board.snapshot(depot)
    }

    pub fn availability_all(&self) -> Vec<Availability> {
        self.board.snapshot_all()
    }

    /// Wait for the worker to exit and return its report.
    ///
    /// Does not stop the run; call [`stop`](Self::stop) first to cut it
    /// short.
    ///
    /// # Errors
    /// `NotStarted` if `start` was never called (or `join` already
    /// returned); `WorkerPanicked` if the worker thread panicked.
    pub fn join(&mut self) -> SimResult<RunReport> {
        let handle = self.worker.take().ok_or(SimError::NotStarted)?;
        handle.join().map_err(|_| SimError::WorkerPanicked)
    }
}

impl<P: DispatchPolicy> Drop for SimulationController<P> {
    fn drop(&mut self) {
        if let Some(handle) = self.worker.take() {
            if !self.control.state().is_terminal() {
                self.control.stop();
            }
            if handle.join().is_err() {
                log::error!("simulation worker panicked");
            }
        }
    }
}
