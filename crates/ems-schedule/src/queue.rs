//! `EventQueue`: min-priority queue of pending events.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log E) push and pop where E = number of pending
//! events.  For a one-day run at a few calls per minute E peaks at a few
//! thousand (all arrivals are pushed up front), so the constant is tiny.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ems_core::SimTime;

use crate::{Event, EventKind};

/// Heap entry with the ordering reversed so `BinaryHeap` pops the smallest
/// `(time, sequence)` first.
struct Pending(Event);

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .time
            .total_cmp(&self.0.time)
            .then_with(|| other.0.sequence.cmp(&self.0.sequence))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Pending events ordered by ascending time, then ascending push order.
///
/// There is no removal other than [`pop`][Self::pop]; a queued event cannot
/// be cancelled.
#[derive(Default)]
pub struct EventQueue {
    heap:          BinaryHeap<Pending>,
    next_sequence: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` at `time` and return the sequence number assigned.
    pub fn push(&mut self, time: SimTime, kind: EventKind) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Pending(Event { time, sequence, kind }));
        sequence
    }

    /// Remove and return the earliest event, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|p| p.0)
    }

    /// Timestamp of the earliest event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|p| p.0.time)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of events ever pushed.
    pub fn pushed(&self) -> u64 {
        self.next_sequence
    }
}
