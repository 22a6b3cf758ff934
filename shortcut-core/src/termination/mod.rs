//! The termination module contains logic which defines when evolution should stop.

use crate::evolution::EvolutionStatistics;
use crate::utils::compare_floats;

/// A trait which specifies criteria when evolution should stop searching for improved tours.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, statistics: &EvolutionStatistics) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, statistics: &EvolutionStatistics) -> f64;
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_time;
pub use self::max_time::MaxTime;

/// Encapsulates multiple termination criteria: terminates when any of them is met.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, statistics: &EvolutionStatistics) -> bool {
        self.terminations.iter().any(|t| t.is_termination(statistics))
    }

    fn estimate(&self, statistics: &EvolutionStatistics) -> f64 {
        self.terminations.iter().map(|t| t.estimate(statistics)).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.)
    }
}
