#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use super::{DistanceMatrix, Location};

/// A candidate solution: an order in which all locations are visited, interpreted as a closed cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    order: Vec<Location>,
}

impl Tour {
    /// Creates a new tour from visiting order.
    pub fn new(order: Vec<Location>) -> Self {
        Self { order }
    }

    /// Returns visiting order.
    pub fn order(&self) -> &[Location] {
        self.order.as_slice()
    }

    /// Consumes the tour and returns its visiting order.
    pub fn into_order(self) -> Vec<Location> {
        self.order
    }

    /// Returns amount of locations in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if tour has no locations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Calculates length of the cycle including the closing edge from the last location to the first one.
    pub fn cycle_length(&self, matrix: &DistanceMatrix) -> f64 {
        if self.order.len() < 2 {
            return 0.;
        }

        let closing = self.order.last().zip(self.order.first()).map_or(0., |(&last, &first)| matrix.cost(last, first));

        self.order.windows(2).map(|pair| matrix.cost(pair[0], pair[1])).sum::<f64>() + closing
    }

    /// Calculates fitness of the tour relative to the total cost of its population.
    pub fn fitness(&self, matrix: &DistanceMatrix, total_cost: f64) -> f64 {
        relative_fitness(self.cycle_length(matrix), total_cost)
    }

    /// Checks that the tour visits each of `size` locations exactly once.
    pub fn is_permutation_of(&self, size: usize) -> bool {
        let mut visited = vec![false; size];

        self.order.len() == size
            && self.order.iter().all(|location| {
                location.index < size && !std::mem::replace(&mut visited[location.index], true)
            })
    }
}

/// Returns a normalized fitness of a cycle with given length: the higher, the better.
/// Values are comparable only within the same population as `total_cost` is its sum of lengths.
pub fn relative_fitness(cycle_length: f64, total_cost: f64) -> f64 {
    assert!(total_cost > 0., "fitness is undefined for a population without cost");

    1. - cycle_length / total_cost
}
