//! Read-only `zones × depots` input matrices.
//!
//! Both matrices are produced outside the simulator (from coordinates, a
//! travel speed and a maximum response time) and handed in fully formed.
//! They are stored row-major: row = demand zone, column = depot.

use crate::{DepotId, EmsError, EmsResult, ZoneId};

/// Dense row-major storage shared by both matrix types.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Grid<T> {
    zones:  usize,
    depots: usize,
    cells:  Vec<T>,
}

impl<T: Copy> Grid<T> {
    fn new(zones: usize, depots: usize, cells: Vec<T>, what: &'static str) -> EmsResult<Self> {
        let expected = zones * depots;
        if cells.len() != expected {
            return Err(EmsError::DimensionMismatch {
                what,
                axis: "cells",
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { zones, depots, cells })
    }

    fn from_rows(rows: Vec<Vec<T>>, what: &'static str) -> EmsResult<Self> {
        let zones = rows.len();
        let depots = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(zones * depots);
        for row in rows {
            if row.len() != depots {
                return Err(EmsError::DimensionMismatch {
                    what,
                    axis: "columns in a row",
                    expected: depots,
                    got: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { zones, depots, cells })
    }

    #[inline]
    fn get(&self, zone: ZoneId, depot: DepotId) -> Option<T> {
        let (z, d) = (zone.index(), depot.index());
        if z >= self.zones || d >= self.depots {
            return None;
        }
        Some(self.cells[z * self.depots + d])
    }

    fn row(&self, zone: ZoneId) -> Option<&[T]> {
        let z = zone.index();
        if z >= self.zones {
            return None;
        }
        Some(&self.cells[z * self.depots..(z + 1) * self.depots])
    }
}

// ── CoverageMatrix ────────────────────────────────────────────────────────────

/// `coverage[zone][depot]` is `true` when the depot can reach the zone within
/// the maximum response time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageMatrix(Grid<bool>);

impl CoverageMatrix {
    /// Build from a flat row-major cell vector of length `zones * depots`.
    pub fn new(zones: usize, depots: usize, cells: Vec<bool>) -> EmsResult<Self> {
        Grid::new(zones, depots, cells, "coverage matrix").map(Self)
    }

    /// Build from one row per zone.  Rows must all have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> EmsResult<Self> {
        Grid::from_rows(rows, "coverage matrix").map(Self)
    }

    /// Every depot covers every zone.
    pub fn full(zones: usize, depots: usize) -> Self {
        Self(Grid { zones, depots, cells: vec![true; zones * depots] })
    }

    pub fn zone_count(&self) -> usize {
        self.0.zones
    }

    pub fn depot_count(&self) -> usize {
        self.0.depots
    }

    /// `None` if either index is out of range.
    #[inline]
    pub fn covers(&self, zone: ZoneId, depot: DepotId) -> Option<bool> {
        self.0.get(zone, depot)
    }

    /// All depots' coverage flags for one zone, indexed by `DepotId`.
    pub fn row(&self, zone: ZoneId) -> Option<&[bool]> {
        self.0.row(zone)
    }
}

// ── TimeMatrix ────────────────────────────────────────────────────────────────

/// One-way travel time in minutes between a depot and a zone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeMatrix(Grid<f64>);

impl TimeMatrix {
    /// Build from a flat row-major cell vector of length `zones * depots`.
    pub fn new(zones: usize, depots: usize, cells: Vec<f64>) -> EmsResult<Self> {
        let grid = Grid::new(zones, depots, cells, "time matrix")?;
        Self::checked(grid)
    }

    /// Build from one row per zone.  Rows must all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> EmsResult<Self> {
        let grid = Grid::from_rows(rows, "time matrix")?;
        Self::checked(grid)
    }

    /// Same travel time for every (zone, depot) pair.
    pub fn uniform(zones: usize, depots: usize, minutes: f64) -> EmsResult<Self> {
        Self::new(zones, depots, vec![minutes; zones * depots])
    }

    fn checked(grid: Grid<f64>) -> EmsResult<Self> {
        for (i, &value) in grid.cells.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                let depots = grid.depots.max(1);
                return Err(EmsError::InvalidTravelTime {
                    zone:  ZoneId((i / depots) as u32),
                    depot: DepotId((i % depots) as u32),
                    value,
                });
            }
        }
        Ok(Self(grid))
    }

    pub fn zone_count(&self) -> usize {
        self.0.zones
    }

    pub fn depot_count(&self) -> usize {
        self.0.depots
    }

    /// `None` if either index is out of range.
    #[inline]
    pub fn travel_time(&self, zone: ZoneId, depot: DepotId) -> Option<f64> {
        self.0.get(zone, depot)
    }
}
