#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use super::TelemetryMode;
use crate::termination::{CompositeTermination, MaxGeneration, MaxTime, Termination};
use crate::utils::{Environment, GenericResult};
use std::sync::Arc;

/// Default amount of tours in each generation.
pub const DEFAULT_POPULATION_SIZE: usize = 750;

/// Default probability to mutate a child.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;

/// Default amount of generations.
pub const DEFAULT_MAX_GENERATIONS: usize = 3;

/// An evolution configuration.
pub struct EvolutionConfig {
    /// Amount of tours in each generation.
    pub population_size: usize,
    /// Probability to apply swap mutation to a child.
    pub mutation_probability: f64,
    /// Defines when evolution stops.
    pub termination: Box<dyn Termination + Send + Sync>,
    /// Telemetry settings.
    pub telemetry_mode: TelemetryMode,
    /// An environment: random generator, external quota, parallelism.
    pub environment: Arc<Environment>,
}

/// Builds [`EvolutionConfig`] with defaults applied to everything which is not specified.
#[derive(Default)]
pub struct EvolutionConfigBuilder {
    population_size: Option<usize>,
    mutation_probability: Option<f64>,
    max_generations: Option<usize>,
    max_time: Option<usize>,
    termination: Option<Box<dyn Termination + Send + Sync>>,
    telemetry_mode: Option<TelemetryMode>,
    environment: Option<Arc<Environment>>,
}

impl EvolutionConfigBuilder {
    /// Sets amount of tours in each generation. Default is 750.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = Some(population_size);
        self
    }

    /// Sets mutation probability. Default is 0.1.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = Some(probability);
        self
    }

    /// Sets max generations to be run. Default is 3 when no other limit is given.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Sets max running time limit in seconds.
    pub fn with_max_time(mut self, limit: Option<usize>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets a custom termination criteria, overrides max generations and max time.
    pub fn with_termination(mut self, termination: Box<dyn Termination + Send + Sync>) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Sets telemetry. Default is no telemetry.
    pub fn with_telemetry_mode(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = Some(mode);
        self
    }

    /// Sets an environment. Default uses an entropy seeded random.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Builds the evolution config.
    pub fn build(self) -> GenericResult<EvolutionConfig> {
        let population_size = self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE);
        if population_size == 0 {
            return Err("population size must be positive".into());
        }

        let mutation_probability = self.mutation_probability.unwrap_or(DEFAULT_MUTATION_PROBABILITY);
        if !(0. ..=1.).contains(&mutation_probability) {
            return Err(format!("mutation probability must be in [0, 1] range, got: {mutation_probability}").into());
        }

        if self.max_generations == Some(0) {
            return Err("max generations must be positive".into());
        }

        let termination = match self.termination {
            Some(termination) => termination,
            None => create_termination(self.max_generations, self.max_time),
        };

        Ok(EvolutionConfig {
            population_size,
            mutation_probability,
            termination,
            telemetry_mode: self.telemetry_mode.unwrap_or(TelemetryMode::None),
            environment: self.environment.unwrap_or_default(),
        })
    }
}

fn create_termination(max_generations: Option<usize>, max_time: Option<usize>) -> Box<dyn Termination + Send + Sync> {
    let max_generations = match (max_generations, max_time) {
        (None, None) => Some(DEFAULT_MAX_GENERATIONS),
        (max_generations, _) => max_generations,
    };

    let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![];
    if let Some(limit) = max_generations {
        terminations.push(Box::new(MaxGeneration::new(limit)));
    }
    if let Some(limit) = max_time {
        terminations.push(Box::new(MaxTime::new(limit as f64)));
    }

    Box::new(CompositeTermination::new(terminations))
}
