#[cfg(test)]
#[path = "../../tests/unit/termination/max_generation_test.rs"]
mod max_generation_test;

use super::*;

/// A termination criteria which is in terminated state when maximum amount of generations is reached.
pub struct MaxGeneration {
    limit: usize,
}

impl MaxGeneration {
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxGeneration {
    fn is_termination(&self, statistics: &EvolutionStatistics) -> bool {
        statistics.generation >= self.limit
    }

    fn estimate(&self, statistics: &EvolutionStatistics) -> f64 {
        if self.limit == 0 {
            return 1.;
        }

        (statistics.generation as f64 / self.limit as f64).min(1.)
    }
}
