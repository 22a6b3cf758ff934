#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use super::{Coordinate, Location};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;

/// A result of one directions lookup between two stops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Leg {
    /// Travel distance, used as the travel cost.
    pub distance: f64,
    /// Travel duration.
    pub duration: f64,
    /// A route geometry as a sequence of coordinates.
    pub geometry: Vec<Coordinate>,
}

impl Leg {
    /// Creates a leg without geometry.
    pub fn new(distance: f64, duration: f64) -> Self {
        Self { distance, duration, geometry: vec![] }
    }
}

/// An N×N table of travel costs between every pair of locations.
///
/// The diagonal is always zero. An off-diagonal entry is zero until its leg is set; entries
/// whose lookup failed keep the zero cost but are remembered in `failures`.
pub struct DistanceMatrix {
    size: usize,
    legs: Vec<Option<Leg>>,
    failures: FxHashSet<(Location, Location)>,
}

impl DistanceMatrix {
    /// Creates an empty matrix for `size` locations.
    pub fn new(size: usize) -> Self {
        Self { size, legs: vec![None; size * size], failures: FxHashSet::default() }
    }

    /// Creates a fully populated matrix from rows of distances. Durations are set to zero.
    pub fn from_costs(rows: Vec<Vec<f64>>) -> GenericResult<Self> {
        let size = rows.len();

        if let Some(row) = rows.iter().position(|row| row.len() != size) {
            let columns = rows[row].len();
            return Err(format!("matrix is not square: row {row} has {columns} columns, expected {size}").into());
        }

        if rows.iter().flatten().any(|cost| !cost.is_finite() || *cost < 0.) {
            return Err("matrix contains negative or not finite costs".into());
        }

        let mut matrix = Self::new(size);
        rows.into_iter().enumerate().for_each(|(from, row)| {
            row.into_iter()
                .enumerate()
                .filter(|(to, _)| from != *to)
                .for_each(|(to, cost)| matrix.set_leg(Location::new(from), Location::new(to), Leg::new(cost, 0.)))
        });

        Ok(matrix)
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns travel cost from one location to another.
    pub fn cost(&self, from: Location, to: Location) -> f64 {
        if from == to {
            return 0.;
        }

        self.legs[self.offset(from, to)].as_ref().map_or(0., |leg| leg.distance)
    }

    /// Returns a leg between two different locations if its lookup has succeeded.
    pub fn leg(&self, from: Location, to: Location) -> Option<&Leg> {
        if from == to { None } else { self.legs[self.offset(from, to)].as_ref() }
    }

    /// Sets a leg for two different locations.
    pub fn set_leg(&mut self, from: Location, to: Location, leg: Leg) {
        assert_ne!(from, to, "diagonal entries cannot be set");
        assert!(leg.distance.is_finite() && leg.distance >= 0., "travel cost must be a non-negative number");

        let offset = self.offset(from, to);
        self.legs[offset] = Some(leg);
        self.failures.remove(&(from, to));
    }

    /// Marks a pair of locations as one whose lookup has failed.
    pub fn mark_failed(&mut self, from: Location, to: Location) {
        let offset = self.offset(from, to);
        self.legs[offset] = None;
        self.failures.insert((from, to));
    }

    /// Returns pairs whose lookups have failed, ordered by source, then by destination.
    pub fn failures(&self) -> Vec<(Location, Location)> {
        let mut failures = self.failures.iter().copied().collect::<Vec<_>>();
        failures.sort();

        failures
    }

    /// Returns true if every off-diagonal entry has a leg.
    pub fn is_complete(&self) -> bool {
        (0..self.size).all(|from| {
            (0..self.size).filter(|&to| to != from).all(|to| self.legs[from * self.size + to].is_some())
        })
    }

    fn offset(&self, from: Location, to: Location) -> usize {
        assert!(from.index < self.size && to.index < self.size, "location is out of matrix bounds");
        from.index * self.size + to.index
    }
}
