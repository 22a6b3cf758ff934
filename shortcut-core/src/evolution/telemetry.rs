//! A module which provides the logic to collect metrics about evolution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use super::{EvolutionStatistics, RankedPopulation};
use crate::utils::Timer;
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Encapsulates different measurements regarding evolution.
pub struct TelemetryMetrics {
    /// Evolution duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: f64,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: f64,
    /// Cycle length of the best tour.
    pub best_cost: f64,
    /// Mean cycle length within population.
    pub mean_cost: f64,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best tour is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often generation is tracked.
        track_best: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best tour is logged.
        log_best: usize,
        /// Specifies how often generation is tracked.
        track_best: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            time: Timer::start(),
            metrics: TelemetryMetrics { duration: 0, generations: 0, speed: 0., evolution: vec![] },
            mode,
        }
    }

    /// Reports initial population statistics.
    pub fn on_initial(&mut self, population: &RankedPopulation, locations: usize, item_time: Timer) {
        let best_cost = population.best().map_or(0., |best| best.cycle_length);

        self.log(
            format!(
                "[{}s] created initial population of {} tours over {} locations in {}ms, best cost: {:.3}",
                self.time.elapsed_secs(),
                population.size(),
                locations,
                item_time.elapsed_millis(),
                best_cost
            )
            .as_str(),
        );
    }

    /// Reports generation statistics. Termination estimate is a progress in the `[0, 1]` range.
    pub fn on_generation(
        &mut self,
        population: &RankedPopulation,
        statistics: &EvolutionStatistics,
        termination_estimate: f64,
        generation_time: Timer,
    ) {
        let generation = statistics.generation;
        self.metrics.generations = generation;

        let (log_best, track_best) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_best } => (None, Some(*track_best)),
            TelemetryMode::All { log_best, track_best, .. } => (Some(*log_best), Some(*track_best)),
        };

        let Some(best) = population.best() else {
            self.log("no progress yet");
            return;
        };

        if log_best.is_some_and(|log_best| generation % log_best.max(1) == 0) {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, progress: {:.0}%, best cost: {:.3}, mean cost: {:.3}",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis(),
                    termination_estimate * 100.,
                    best.cycle_length,
                    population.mean_cost()
                )
                .as_str(),
            );
        }

        if track_best.is_some_and(|track_best| generation % track_best.max(1) == 0) {
            self.track(population, generation);
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, population: &RankedPopulation, statistics: &EvolutionStatistics) {
        let generations = statistics.generation;

        let should_track = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { .. } => false,
            TelemetryMode::OnlyMetrics { track_best } | TelemetryMode::All { track_best, .. } => {
                generations % (*track_best).max(1) != 0
            }
        };

        if should_track {
            self.track(population, generations);
        }

        let elapsed = self.time.elapsed_secs() as usize;
        let speed = generations as f64 / self.time.elapsed_secs_as_float();

        self.log(format!("[{elapsed}s] total generations: {generations}, speed: {speed:.2} gen/sec").as_str());
        match population.best() {
            Some(best) => self.log(format!("\tbest cost: {:.3}", best.cycle_length).as_str()),
            None => self.log("no tours found"),
        }

        self.metrics.generations = generations;
        self.metrics.duration = elapsed;
        self.metrics.speed = speed;
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }

    fn track(&mut self, population: &RankedPopulation, generation: usize) {
        if let Some(best) = population.best() {
            self.metrics.evolution.push(TelemetryGeneration {
                number: generation,
                timestamp: self.time.elapsed_secs_as_float(),
                best_cost: best.cycle_length,
                mean_cost: population.mean_cost(),
            });
        }
    }
}
