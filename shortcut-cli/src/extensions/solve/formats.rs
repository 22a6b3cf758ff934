//! Contains problem, routing matrix and route formats.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use serde::{Deserialize, Serialize};
use shortcut_core::evolution::TelemetryMetrics;
use shortcut_core::models::{Coordinate, Stop};
use shortcut_core::planner::PlannedRoute;
use shortcut_core::routing::MatrixDirections;
use std::io::{BufReader, BufWriter, Read, Write};

/// A default limit of stops besides the start.
pub const DEFAULT_MAX_STOPS: usize = 5;

/// A problem definition: a list of stops, the first one is the start.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct ProblemDef {
    /// Stops to visit.
    pub stops: Vec<StopDef>,
}

/// A stop definition.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct StopDef {
    /// An optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A stop location.
    pub location: LocationDef,
}

/// A geographic location.
#[derive(Clone, Copy, Deserialize, Serialize, Debug)]
pub struct LocationDef {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl ProblemDef {
    /// Converts the definition into stops rejecting invalid coordinates.
    pub fn to_stops(&self) -> Result<Vec<Stop>, String> {
        self.stops
            .iter()
            .enumerate()
            .map(|(idx, stop)| {
                let coordinate = Coordinate::new(stop.location.lat, stop.location.lng);
                if coordinate.is_valid() {
                    Ok(Stop::new(stop.name.clone(), coordinate))
                } else {
                    Err(format!("stop at index {idx} has invalid location: ({}, {})", coordinate.lat, coordinate.lng))
                }
            })
            .collect()
    }
}

/// A routing matrix definition in row-major order.
#[derive(Clone, Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MatrixDef {
    /// Travel distances.
    pub distances: Vec<f64>,
    /// Travel durations.
    pub travel_times: Vec<f64>,
    /// Error codes, non-zero value means that there is no route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_codes: Option<Vec<i64>>,
}

/// Reads stops from a problem in JSON format.
pub fn read_problem<R: Read>(reader: BufReader<R>) -> Result<Vec<Stop>, String> {
    let problem: ProblemDef =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: '{err}'"))?;

    problem.to_stops()
}

/// Checks that there is a start and at most `max_stops` other stops. Zero disables the limit.
pub fn check_stops(stops: &[Stop], max_stops: usize) -> Result<(), String> {
    if stops.is_empty() {
        return Err("problem has no stops".to_string());
    }

    let others = stops.len() - 1;
    if max_stops > 0 && others > max_stops {
        return Err(format!("too many stops: {others} besides the start, at most {max_stops} allowed"));
    }

    Ok(())
}

/// Reads a routing matrix for `size` stops in JSON format.
pub fn read_matrix<R: Read>(reader: BufReader<R>, size: usize) -> Result<MatrixDirections, String> {
    let matrix: MatrixDef =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize routing matrix: '{err}'"))?;

    MatrixDirections::new(size, matrix.distances, matrix.travel_times, matrix.error_codes)
        .map_err(|err| err.to_string())
}

/// A route output.
#[derive(Clone, Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RouteOutput {
    /// Stop names in visiting order, starting and ending at the start.
    pub names: Vec<String>,
    /// Route segments in visiting order.
    pub segments: Vec<SegmentOutput>,
    /// Coordinates of stops in visiting order as `[lat, lng]`.
    pub waypoints: Vec<[f64; 2]>,
    /// Total distance.
    pub total_distance: f64,
    /// Total duration.
    pub total_duration: f64,
    /// Amount of generations.
    pub generations: usize,
    /// Evolution metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsOutput>,
}

/// A route segment output.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct SegmentOutput {
    /// A source stop index.
    pub from: usize,
    /// A destination stop index.
    pub to: usize,
    /// Travel distance.
    pub distance: f64,
    /// Travel duration.
    pub duration: f64,
    /// Route geometry as `[lat, lng]` pairs.
    pub geometry: Vec<[f64; 2]>,
}

/// Evolution metrics output.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct MetricsOutput {
    /// Duration in seconds.
    pub duration: usize,
    /// Amount of generations.
    pub generations: usize,
    /// Generations per second.
    pub speed: f64,
    /// Tracked generations.
    pub evolution: Vec<GenerationOutput>,
}

/// A tracked generation output.
#[derive(Clone, Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutput {
    /// Generation number.
    pub number: usize,
    /// Seconds since evolution has started.
    pub timestamp: f64,
    /// Cycle length of the best tour.
    pub best_cost: f64,
    /// Mean cycle length.
    pub mean_cost: f64,
}

impl From<&PlannedRoute> for RouteOutput {
    fn from(planned: &PlannedRoute) -> Self {
        let route = &planned.route;

        Self {
            names: route.names.clone(),
            segments: route
                .segments
                .iter()
                .map(|segment| SegmentOutput {
                    from: segment.from.index,
                    to: segment.to.index,
                    distance: segment.leg.distance,
                    duration: segment.leg.duration,
                    geometry: segment.leg.geometry.iter().map(to_lat_lng).collect(),
                })
                .collect(),
            waypoints: route.waypoints.iter().map(to_lat_lng).collect(),
            total_distance: route.total_distance,
            total_duration: route.total_duration,
            generations: planned.generations,
            metrics: planned.metrics.as_ref().map(MetricsOutput::from),
        }
    }
}

impl From<&TelemetryMetrics> for MetricsOutput {
    fn from(metrics: &TelemetryMetrics) -> Self {
        Self {
            duration: metrics.duration,
            generations: metrics.generations,
            speed: metrics.speed,
            evolution: metrics
                .evolution
                .iter()
                .map(|generation| GenerationOutput {
                    number: generation.number,
                    timestamp: generation.timestamp,
                    best_cost: generation.best_cost,
                    mean_cost: generation.mean_cost,
                })
                .collect(),
        }
    }
}

/// Writes a planned route in JSON format.
pub fn write_route<W: Write>(mut writer: BufWriter<W>, planned: &PlannedRoute) -> Result<(), String> {
    let output = RouteOutput::from(planned);

    serde_json::to_writer_pretty(&mut writer, &output).map_err(|err| format!("cannot write route: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write route: '{err}'"))
}

fn to_lat_lng(coordinate: &Coordinate) -> [f64; 2] {
    [coordinate.lat, coordinate.lng]
}
