//! The `Engine` struct and its event loop.

use std::sync::Arc;

use ems_core::{
    CoverageMatrix, DepotId, EmsError, MissionId, SimClock, SimConfig, SimRng, SimTime, TimeMatrix,
    UnitId, ZoneId,
};
use ems_dispatch::{
    Assignment, Availability, AvailabilityBoard, DispatchContext, DispatchPolicy, ResourcePool,
    ServiceTime,
};
use ems_mission::{LogSummary, Mission, MissionLog, MissionTracker};
use ems_schedule::{Event, EventKind, EventQueue};

use crate::{Checkpoint, NoopObserver, Progress, RunControl, RunState, SimError, SimObserver, SimResult};

// ── Engine ────────────────────────────────────────────────────────────────────

/// The discrete-event dispatch simulation.
///
/// `Engine<P>` owns all run state: the clock, the event queue (pre-filled
/// with every arrival for the horizon), the resource pool, the mission
/// tracker and the service-time RNG stream.  Each loop iteration:
///
/// 1. **Checkpoint**: honour pause/stop (between events only).
/// 2. **Pop**: take the earliest `(time, sequence)` event.
/// 3. **Advance**: move the clock to the event time (never backwards).
/// 4. **Handle**: `Arrival` → dispatch or block; `Completion` → release the
///    unit and close the mission.  A handler error is logged as a
///    `HandlerError` entry and the loop carries on.
/// 5. **Report**: observer callbacks for the event, new log entries and
///    progress.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<P: DispatchPolicy> {
    pub(crate) config:      SimConfig,
    pub(crate) clock:       SimClock,
    pub(crate) queue:       EventQueue,
    pub(crate) pool:        ResourcePool,
    pub(crate) tracker:     MissionTracker,
    pub(crate) coverage:    CoverageMatrix,
    pub(crate) times:       TimeMatrix,
    pub(crate) policy:      P,
    pub(crate) service:     ServiceTime,
    pub(crate) service_rng: SimRng,
    /// Arrivals pushed at build time.
    pub(crate) arrivals:    usize,
    pub(crate) processed:   u64,
}

/// Everything a finished (or stopped) run leaves behind.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub state:         RunState,
    /// Clock at exit: time of the last processed event.
    pub final_time:    SimTime,
    pub processed:     u64,
    /// Events still queued at exit (non-zero only for `Stopped`).
    pub pending:       usize,
    pub arrivals:      usize,
    /// Missions dispatched but not completed when the loop exited.
    pub open_missions: Vec<Mission>,
    pub log:           MissionLog,
}

impl RunReport {
    pub fn summary(&self) -> LogSummary {
        LogSummary::from_entries(&self.log)
    }
}

impl<P: DispatchPolicy> Engine<P> {
    // ── Read-only accessors ───────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn log(&self) -> &MissionLog {
        self.tracker.log()
    }

    pub fn tracker(&self) -> &MissionTracker {
        &self.tracker
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Number of arrival events generated (or scripted) for this run.
    pub fn arrivals_generated(&self) -> usize {
        self.arrivals
    }

    /// Events not yet processed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            processed: self.processed,
            total:     self.processed + self.queue.len() as u64,
        }
    }

    /// Free/total units at `depot` right now.
    pub fn availability(&self, depot: DepotId) -> Option<Availability> {
        self.pool.board().snapshot(depot)
    }

    /// Shared live-availability counters, readable from any thread.
    pub fn board(&self) -> Arc<AvailabilityBoard> {
        self.pool.board()
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run until the queue is empty.  Always returns `Finished`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunState {
        self.run_with(&RunControl::new(), observer)
    }

    /// Run until the queue is empty or `control` requests a stop.
    ///
    /// Pause and stop are honoured only between events.  A stopped run
    /// keeps its remaining events queued; calling `run_with` again with a
    /// fresh control continues from there.
    pub fn run_with<O: SimObserver>(&mut self, control: &RunControl, observer: &mut O) -> RunState {
        log::info!(
            "simulation starting at {}: {} events queued, {} depots",
            self.clock.now(),
            self.queue.len(),
            self.pool.depot_count()
        );
        observer.on_start(self.queue.len());

        let state = loop {
            // A drained queue finishes the run even if a stop arrived while
            // the last event was being handled.
            if self.queue.is_empty() {
                break RunState::Finished;
            }
            if control.checkpoint() == Checkpoint::Stop {
                break RunState::Stopped;
            }
            let before = self.tracker.log().len();
            let Some(event) = self.step() else {
                break RunState::Finished;
            };
            observer.on_event(&event);
            for entry in self.tracker.log().since(before) {
                observer.on_entry(entry);
            }
            observer.on_progress(self.progress());
        };

        control.set_state(state);
        log::info!(
            "simulation {} at {}: {} events processed, {} pending, {} missions open",
            if state == RunState::Finished { "finished" } else { "stopped" },
            self.clock.now(),
            self.processed,
            self.queue.len(),
            self.tracker.active_count()
        );
        observer.on_finish(state);
        state
    }

    /// Process exactly one event.  Returns it, or `None` if the queue is
    /// empty.
    ///
    /// Errors from the clock or the handler are recorded as `HandlerError`
    /// log entries rather than returned.
    pub fn step(&mut self) -> Option<Event> {
        let event = self.queue.pop()?;
        log::trace!("processing {event}");

        let result = self
            .clock
            .advance_to(event.time)
            .map_err(SimError::from)
            .and_then(|()| self.handle(&event));
        if let Err(e) = result {
            log::warn!("event #{} ({}) failed: {e}", event.sequence, event.kind);
            self.tracker
                .record_handler_error(self.clock.now(), event.sequence, event.kind, &e);
        }

        self.processed += 1;
        Some(event)
    }

    /// Consume the engine, keeping the log and end-of-run counters.
    pub fn into_report(self, state: RunState) -> RunReport {
        RunReport {
            state,
            final_time:    self.clock.now(),
            processed:     self.processed,
            pending:       self.queue.len(),
            arrivals:      self.arrivals,
            open_missions: self.tracker.active().copied().collect(),
            log:           self.tracker.into_log(),
        }
    }

    /// Convenience: run to completion with no observer and return the report.
    pub fn run_to_end(mut self) -> RunReport {
        let state = self.run(&mut NoopObserver);
        self.into_report(state)
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    fn handle(&mut self, event: &Event) -> SimResult<()> {
        match event.kind {
            EventKind::Arrival { zone } => self.handle_arrival(zone),
            EventKind::Completion { depot, unit, mission } => {
                self.handle_completion(depot, unit, mission)
            }
        }
    }

    fn handle_arrival(&mut self, zone: ZoneId) -> SimResult<()> {
        let now = self.clock.now();
        let ctx = DispatchContext::new(now, &self.coverage, &self.times, &self.pool);
        let Some(assignment) = self.policy.select(zone, &ctx)? else {
            log::debug!("{now}: {zone} blocked, no covering depot has a free unit");
            self.tracker.record_blocked(now, zone);
            return Ok(());
        };

        if self.coverage.covers(zone, assignment.depot) != Some(true) {
            return Err(SimError::UncoveredAssignment { zone, depot: assignment.depot });
        }
        // The round trip always uses the matrix entry, whatever the policy
        // reported.
        let travel_time = self
            .times
            .travel_time(zone, assignment.depot)
            .ok_or(EmsError::UnknownDepot(assignment.depot))?;
        let assignment = Assignment { travel_time, ..assignment };

        let mission_id = self.tracker.allocate_id();
        let unit = self.pool.acquire(assignment.depot, mission_id)?;
        let service = self.service.sample(&mut self.service_rng);
        let end = assignment.return_time(now, service);

        self.tracker.open(Mission {
            id:                mission_id,
            zone,
            depot:             assignment.depot,
            unit,
            start_time:        now,
            expected_end_time: end,
        })?;
        self.queue.push(
            end,
            EventKind::Completion { depot: assignment.depot, unit, mission: mission_id },
        );
        log::debug!(
            "{now}: {mission_id} {}/{unit} -> {zone}, travel {:.2} + service {service:.2}, back {end}",
            assignment.depot,
            assignment.travel_time
        );
        Ok(())
    }

    fn handle_completion(
        &mut self,
        depot:   DepotId,
        unit:    UnitId,
        mission: MissionId,
    ) -> SimResult<()> {
        let now = self.clock.now();
        self.pool.release(depot, unit, mission)?;
        self.tracker.close(now, mission)?;
        log::debug!("{now}: {mission} complete, {depot}/{unit} available");
        Ok(())
    }
}
