//! The planner module exposes the optimizer API: build a distance matrix for stops, run
//! evolution on a background worker while receiving generation reports, cancel it and assemble
//! the best tour into a route.

#[cfg(test)]
#[path = "../../tests/unit/planner/planner_test.rs"]
mod planner_test;

use crate::evolution::{Evolution, EvolutionConfig, GenerationReport, TelemetryMetrics};
use crate::models::{DistanceMatrix, Location, Stop, Tour, create_locations};
use crate::routing::{DirectionsService, ErrorReporter, MatrixBuilder};
use crate::utils::{CancellationQuota, GenericError, GenericResult, Quota};
use std::sync::Arc;
use std::thread::JoinHandle;
use tokio::sync::mpsc;

mod assembler;
pub use self::assembler::*;

/// Builds run handles: populates a distance matrix for given stops using directions service.
pub struct Optimizer {
    builder: MatrixBuilder,
}

impl Optimizer {
    /// Creates a new instance of `Optimizer`.
    pub fn new(service: Arc<dyn DirectionsService>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { builder: MatrixBuilder::new(service, reporter) }
    }

    /// Builds a distance matrix and returns a handle of a run. The first stop is the start.
    pub async fn build(&self, stops: Vec<Stop>) -> GenericResult<RunHandle> {
        let matrix = self.builder.build(stops.as_slice()).await?;

        Ok(RunHandle { stops, matrix: Arc::new(matrix), cancellation: CancellationQuota::default() })
    }
}

/// A single optimization run over an immutable distance matrix.
pub struct RunHandle {
    stops: Vec<Stop>,
    matrix: Arc<DistanceMatrix>,
    cancellation: CancellationQuota,
}

impl RunHandle {
    /// Returns stops of the run.
    pub fn stops(&self) -> &[Stop] {
        self.stops.as_slice()
    }

    /// Returns the distance matrix of the run.
    pub fn matrix(&self) -> &DistanceMatrix {
        self.matrix.as_ref()
    }

    /// Returns pairs of locations for which directions lookup has failed.
    pub fn failures(&self) -> Vec<(Location, Location)> {
        self.matrix.failures()
    }

    /// Requests a cooperative stop: evolution stops before its next generation starts.
    /// Calling it more than once has no additional effect.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Returns true if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_reached()
    }

    /// Starts evolution on a background worker thread. Generation reports are delivered
    /// through the returned receiver in strictly increasing order.
    pub fn optimize(&self, config: EvolutionConfig) -> GenericResult<GenerationReceiver> {
        let mut generations = Evolution::new(config, self.matrix.clone()).run(Some(self.cancellation_quota()))?;
        let (sender, receiver) = mpsc::unbounded_channel();

        let worker = std::thread::Builder::new().name("evolution".to_string()).spawn(move || {
            for report in generations.by_ref() {
                if sender.send(report).is_err() {
                    break;
                }
            }

            generations.take_metrics()
        })?;

        Ok(GenerationReceiver { receiver, worker })
    }

    /// Runs evolution on the current thread calling `on_generation` with the best tour and
    /// generation number once per generation. Returns collected metrics, if any.
    pub fn optimize_with<F>(
        &self,
        config: EvolutionConfig,
        mut on_generation: F,
    ) -> GenericResult<Option<TelemetryMetrics>>
    where
        F: FnMut(&Tour, usize),
    {
        let mut generations = Evolution::new(config, self.matrix.clone()).run(Some(self.cancellation_quota()))?;

        generations.by_ref().for_each(|report| on_generation(&report.best, report.generation));

        Ok(generations.take_metrics())
    }

    /// Assembles a route from the given tour.
    pub fn assemble(&self, tour: &Tour) -> GenericResult<RouteResult> {
        assemble_route(tour, self.stops.as_slice(), self.matrix.as_ref())
    }

    fn cancellation_quota(&self) -> Arc<dyn Quota + Send + Sync> {
        Arc::new(self.cancellation.clone())
    }
}

/// Receives generation reports from an evolution worker.
pub struct GenerationReceiver {
    receiver: mpsc::UnboundedReceiver<GenerationReport>,
    worker: JoinHandle<Option<TelemetryMetrics>>,
}

impl GenerationReceiver {
    /// Waits for the next generation report. Returns `None` when evolution is over.
    pub async fn next_report(&mut self) -> Option<GenerationReport> {
        self.receiver.recv().await
    }

    /// Waits for the worker to complete and returns collected metrics. Reports which were not
    /// received yet are discarded.
    pub fn finish(mut self) -> GenericResult<Option<TelemetryMetrics>> {
        self.receiver.close();

        self.worker.join().map_err(|_| GenericError::from("evolution worker has panicked"))
    }
}

/// Blocks the current thread while waiting for a report, must not be used within async context.
impl Iterator for GenerationReceiver {
    type Item = GenerationReport;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.blocking_recv()
    }
}

/// A planned route together with evolution details.
pub struct PlannedRoute {
    /// An assembled route.
    pub route: RouteResult,
    /// Amount of completed generations.
    pub generations: usize,
    /// Cycle length of the reported tour.
    pub best_cost: f64,
    /// Evolution metrics, if telemetry is configured to collect them.
    pub metrics: Option<TelemetryMetrics>,
}

/// Runs the whole planning flow: builds the matrix, evolves tours and assembles the best one.
pub struct Planner {
    optimizer: Optimizer,
}

impl Planner {
    /// Creates a new instance of `Planner`.
    pub fn new(service: Arc<dyn DirectionsService>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { optimizer: Optimizer::new(service, reporter) }
    }

    /// Plans a round trip through stops starting at the first one. Fails without a route when
    /// any directions lookup has failed.
    pub async fn plan(&self, stops: Vec<Stop>, config: EvolutionConfig) -> GenericResult<PlannedRoute> {
        let handle = self.optimizer.build(stops).await?;

        let failures = handle.failures();
        if !failures.is_empty() {
            let stops = handle.stops();
            let legs = failures
                .iter()
                .map(|(from, to)| {
                    format!("'{}' -> '{}'", stops[from.index].display_name(), stops[to.index].display_name())
                })
                .collect::<Vec<_>>()
                .join(", ");

            return Err(format!("cannot plan a route, directions lookup failed for: {legs}").into());
        }

        if handle.stops().len() < 2 {
            let tour = Tour::new(create_locations(handle.stops().len()));
            return Ok(PlannedRoute { route: handle.assemble(&tour)?, generations: 0, best_cost: 0., metrics: None });
        }

        let mut receiver = handle.optimize(config)?;
        let mut last_report = None;
        while let Some(report) = receiver.next_report().await {
            last_report = Some(report);
        }

        let metrics = tokio::task::spawn_blocking(move || receiver.finish()).await??;
        let report = last_report.ok_or("optimization has stopped before the first generation")?;

        Ok(PlannedRoute {
            route: handle.assemble(&report.best)?,
            generations: report.generation,
            best_cost: report.best_cost,
            metrics,
        })
    }
}
