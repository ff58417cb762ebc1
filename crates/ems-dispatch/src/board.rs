//! Lock-free live availability for readers outside the event loop.
//!
//! The event loop is the only writer.  Readers get a point-in-time snapshot
//! per depot; two depots read one after the other may reflect different
//! moments of the run.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Free/total units of one depot at the moment it was read.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Availability {
    pub available: usize,
    pub capacity:  usize,
}

/// Coarse occupancy band for display.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DepotStatus {
    /// Every unit is at base.
    AllAvailable,
    /// Some units are out, at least one is free.
    Partial,
    /// No unit is free (includes depots with no units).
    Exhausted,
}

impl Availability {
    pub fn busy(&self) -> usize {
        self.capacity - self.available
    }

    pub fn status(&self) -> DepotStatus {
        if self.available == 0 {
            DepotStatus::Exhausted
        } else if self.available < self.capacity {
            DepotStatus::Partial
        } else {
            DepotStatus::AllAvailable
        }
    }
}

/// Per-depot free-unit counters published by the [`ResourcePool`].
///
/// [`ResourcePool`]: crate::ResourcePool
pub struct AvailabilityBoard {
    available: Vec<AtomicUsize>,
    capacity:  Vec<usize>,
}

impl AvailabilityBoard {
    pub(crate) fn new(capacity: Vec<usize>) -> Self {
        Self {
            available: capacity.iter().map(|&c| AtomicUsize::new(c)).collect(),
            capacity,
        }
    }

    #[inline]
    pub(crate) fn publish(&self, depot: usize, available: usize) {
        self.available[depot].store(available, Ordering::Release);
    }

    pub fn depot_count(&self) -> usize {
        self.capacity.len()
    }

    /// Snapshot of one depot, or `None` for an unknown index.
    pub fn snapshot(&self, depot: ems_core::DepotId) -> Option<Availability> {
        let j = depot.index();
        Some(Availability {
            available: self.available.get(j)?.load(Ordering::Acquire),
            capacity:  self.capacity[j],
        })
    }

    /// Snapshot of every depot, indexed by `DepotId`.
    pub fn snapshot_all(&self) -> Vec<Availability> {
        self.available
            .iter()
            .zip(&self.capacity)
            .map(|(a, &capacity)| Availability {
                available: a.load(Ordering::Acquire),
                capacity,
            })
            .collect()
    }
}
