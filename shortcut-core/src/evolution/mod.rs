//! The evolution module contains the genetic algorithm which searches for the shortest tour:
//! fitness proportionate selection, ordered crossover and swap mutation with a full generational
//! replacement (no elitism).

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

use crate::models::{DistanceMatrix, Tour, create_locations};
use crate::utils::{CompositeQuota, GenericResult, Quota, ThreadPool, Timer};
use std::sync::Arc;

mod config;
pub use self::config::*;

mod crossover;
pub use self::crossover::*;

mod mutation;
pub use self::mutation::*;

mod population;
pub use self::population::*;

mod selection;
pub use self::selection::*;

mod telemetry;
pub use self::telemetry::*;

/// A statistics about evolution progress used by termination criteria.
#[derive(Clone)]
pub struct EvolutionStatistics {
    /// Amount of completed generations.
    pub generation: usize,
    /// Time since evolution started.
    pub time: Timer,
}

impl Default for EvolutionStatistics {
    fn default() -> Self {
        Self { generation: 0, time: Timer::start() }
    }
}

/// A progress report which is emitted once per completed generation.
#[derive(Clone, Debug)]
pub struct GenerationReport {
    /// A generation number, starts from 1.
    pub generation: usize,
    /// The best tour of the generation.
    pub best: Tour,
    /// Cycle length of the best tour.
    pub best_cost: f64,
    /// True when no more generations follow.
    pub is_final: bool,
}

/// Runs the genetic algorithm over a complete distance matrix.
pub struct Evolution {
    config: EvolutionConfig,
    matrix: Arc<DistanceMatrix>,
}

impl Evolution {
    /// Creates a new instance of `Evolution`.
    pub fn new(config: EvolutionConfig, matrix: Arc<DistanceMatrix>) -> Self {
        Self { config, matrix }
    }

    /// Starts evolution. Generations are produced lazily by the returned iterator which stops
    /// when termination criteria, environment quota or given cancellation quota is reached.
    pub fn run(self, cancellation: Option<Arc<dyn Quota + Send + Sync>>) -> GenericResult<Generations> {
        let pool = self.config.environment.parallelism.map(ThreadPool::new).transpose()?;
        let telemetry = Telemetry::new(self.config.telemetry_mode.clone());
        let quota =
            CompositeQuota::new(self.config.environment.quota.iter().chain(cancellation.iter()).cloned().collect());

        Ok(Generations {
            config: self.config,
            matrix: self.matrix,
            quota,
            pool,
            telemetry,
            statistics: EvolutionStatistics::default(),
            state: EvolutionState::Idle,
        })
    }
}

enum EvolutionState {
    Idle,
    Running(RankedPopulation),
    Terminated,
}

/// An iterator over generations of a running evolution.
pub struct Generations {
    config: EvolutionConfig,
    matrix: Arc<DistanceMatrix>,
    quota: CompositeQuota,
    pool: Option<ThreadPool>,
    telemetry: Telemetry,
    statistics: EvolutionStatistics,
    state: EvolutionState,
}

impl Generations {
    #[cfg(test)]
    pub(crate) fn statistics(&self) -> &EvolutionStatistics {
        &self.statistics
    }

    /// Consumes evolution and returns collected metrics, if telemetry is configured to track them.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        self.telemetry.take_metrics()
    }

    fn should_stop(&self) -> bool {
        self.config.termination.is_termination(&self.statistics) || self.quota.is_reached()
    }

    fn initialize(&mut self) -> Option<RankedPopulation> {
        let size = self.matrix.size();
        if size < 2 {
            self.telemetry.log(format!("nothing to optimize for {size} location(s)").as_str());
            return None;
        }

        let item_time = Timer::start();
        let locations = create_locations(size);
        let random = self.config.environment.random.as_ref();

        let population = Population::new_random(self.config.population_size, locations.as_slice(), random)
            .rank(self.matrix.as_ref(), self.pool.as_ref());

        self.telemetry.on_initial(&population, size, item_time);

        Some(population)
    }

    fn next_population(&self, current: &RankedPopulation) -> RankedPopulation {
        let random = self.config.environment.random.as_ref();
        let size = self.matrix.size();

        let offspring = (0..self.config.population_size)
            .map(|_| {
                let first = select_parent(current, random);
                let second = select_parent(current, random);

                let child = crossover(&first.tour, &second.tour, random);
                let child = swap_mutation(child, self.config.mutation_probability, random);
                debug_assert!(child.is_permutation_of(size));

                child
            })
            .collect();

        Population::new(offspring).rank(self.matrix.as_ref(), self.pool.as_ref())
    }
}

impl Iterator for Generations {
    type Item = GenerationReport;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match std::mem::replace(&mut self.state, EvolutionState::Terminated) {
            EvolutionState::Terminated => return None,
            EvolutionState::Idle => self.initialize()?,
            EvolutionState::Running(current) => current,
        };

        if self.should_stop() {
            self.telemetry.on_result(&current, &self.statistics);
            return None;
        }

        let generation_time = Timer::start();
        let next = self.next_population(&current);
        self.statistics.generation += 1;

        let best = next.best()?.clone();
        let is_final = self.should_stop();

        let termination_estimate = self.config.termination.estimate(&self.statistics);
        self.telemetry.on_generation(&next, &self.statistics, termination_estimate, generation_time);
        if is_final {
            self.telemetry.on_result(&next, &self.statistics);
        } else {
            self.state = EvolutionState::Running(next);
        }

        Some(GenerationReport {
            generation: self.statistics.generation,
            best: best.tour,
            best_cost: best.cycle_length,
            is_final,
        })
    }
}
