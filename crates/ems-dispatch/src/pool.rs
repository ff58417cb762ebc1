//! The `ResourcePool`: per-depot available and busy units.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use ems_core::{DepotId, MissionId, UnitId};

use crate::{AvailabilityBoard, DispatchError, DispatchResult};

/// One depot's fleet.
///
/// Invariant: `available` and the keys of `busy` are disjoint and together
/// hold exactly `capacity` units (`UnitId(0) .. UnitId(capacity)`).
#[derive(Clone, Debug)]
pub struct Depot {
    id:        DepotId,
    capacity:  usize,
    /// Free units in the order they will be handed out (front first).
    available: VecDeque<UnitId>,
    /// Units on a mission.  `BTreeMap` keeps debug output stable.
    busy:      BTreeMap<UnitId, MissionId>,
}

impl Depot {
    fn new(id: DepotId, capacity: u32) -> Self {
        Self {
            id,
            capacity:  capacity as usize,
            available: (0..capacity).map(UnitId).collect(),
            busy:      BTreeMap::new(),
        }
    }

    pub fn id(&self) -> DepotId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    #[inline]
    pub fn busy_count(&self) -> usize {
        self.busy.len()
    }

    /// The mission `unit` is currently serving, if any.
    pub fn mission_of(&self, unit: UnitId) -> Option<MissionId> {
        self.busy.get(&unit).copied()
    }

    /// Check the available/busy partition invariant.
    pub fn is_consistent(&self) -> bool {
        self.available.len() + self.busy.len() == self.capacity
            && self.available.iter().all(|u| !self.busy.contains_key(u))
    }
}

/// Every depot's fleet, created once from the fleet vector and never resized.
///
/// The pool is owned by the event loop.  Each acquire and release publishes
/// the new free count to the shared [`AvailabilityBoard`], which is what
/// outside threads read.
pub struct ResourcePool {
    depots: Vec<Depot>,
    board:  Arc<AvailabilityBoard>,
}

impl ResourcePool {
    /// One depot per entry of `fleet`, with that many units, all available.
    pub fn new(fleet: &[u32]) -> Self {
        let depots: Vec<Depot> = fleet
            .iter()
            .enumerate()
            .map(|(j, &capacity)| Depot::new(DepotId(j as u32), capacity))
            .collect();
        let board = Arc::new(AvailabilityBoard::new(
            depots.iter().map(Depot::capacity).collect(),
        ));
        Self { depots, board }
    }

    pub fn depot_count(&self) -> usize {
        self.depots.len()
    }

    pub fn depot(&self, id: DepotId) -> Option<&Depot> {
        self.depots.get(id.index())
    }

    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Free units at `depot`; zero for an unknown depot.
    #[inline]
    pub fn available_count(&self, depot: DepotId) -> usize {
        self.depot(depot).map_or(0, Depot::available_count)
    }

    /// Shared handle to the live availability counts.
    pub fn board(&self) -> Arc<AvailabilityBoard> {
        Arc::clone(&self.board)
    }

    /// Take the first available unit at `depot` and mark it busy on `mission`.
    ///
    /// # Errors
    /// `UnknownDepot` or `NoUnitAvailable`.  The pool is unchanged on error.
    pub fn acquire(&mut self, depot: DepotId, mission: MissionId) -> DispatchResult<UnitId> {
        let d = self
            .depots
            .get_mut(depot.index())
            .ok_or(DispatchError::UnknownDepot(depot))?;
        let unit = d
            .available
            .pop_front()
            .ok_or(DispatchError::NoUnitAvailable(depot))?;
        d.busy.insert(unit, mission);
        self.board.publish(depot.index(), d.available.len());
        Ok(unit)
    }

    /// Return `unit` from `mission` to the back of `depot`'s available queue.
    ///
    /// This is the only way a unit becomes available again.
    ///
    /// # Errors
    /// `UnknownDepot`, `UnitNotBusy`, or `MissionMismatch` when the unit is
    /// busy on a different mission.  The pool is unchanged on error.
    pub fn release(
        &mut self,
        depot:   DepotId,
        unit:    UnitId,
        mission: MissionId,
    ) -> DispatchResult<()> {
        let d = self
            .depots
            .get_mut(depot.index())
            .ok_or(DispatchError::UnknownDepot(depot))?;
        match d.busy.get(&unit) {
            None => return Err(DispatchError::UnitNotBusy { depot, unit }),
            Some(&found) if found != mission => {
                return Err(DispatchError::MissionMismatch {
                    depot,
                    unit,
                    expected: mission,
                    found,
                });
            }
            Some(_) => {}
        }
        d.busy.remove(&unit);
        d.available.push_back(unit);
        self.board.publish(depot.index(), d.available.len());
        Ok(())
    }

    /// `true` if every depot satisfies the partition invariant.
    pub fn is_consistent(&self) -> bool {
        self.depots.iter().all(Depot::is_consistent)
    }
}
