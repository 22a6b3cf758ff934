#[cfg(test)]
#[path = "../../tests/unit/routing/services_test.rs"]
mod services_test;

use super::*;
use crate::models::Coordinate;
use std::sync::Arc;

/// A default approximation speed in meters per second.
pub const DEFAULT_APPROX_SPEED: f64 = 10.;

/// A directions service which approximates travel with a straight line on the Earth surface.
pub struct ApproxDirections {
    speed: f64,
}

impl ApproxDirections {
    /// Creates a new instance of `ApproxDirections` with given speed in meters per second.
    pub fn new(speed: f64) -> GenericResult<Self> {
        if !speed.is_finite() || speed <= 0. {
            return Err(format!("approximation speed must be positive, got: {speed}").into());
        }

        Ok(Self { speed })
    }
}

impl Default for ApproxDirections {
    fn default() -> Self {
        Self { speed: DEFAULT_APPROX_SPEED }
    }
}

impl DirectionsService for ApproxDirections {
    fn directions(&self, request: DirectionsRequest) -> LegFuture {
        let speed = self.speed;

        Box::pin(async move {
            let (source, destination) = (request.source.coordinate, request.destination.coordinate);

            if !source.is_valid() || !destination.is_valid() {
                return Err(format!(
                    "cannot approximate directions from '{}' to '{}': invalid coordinate",
                    request.source.display_name(),
                    request.destination.display_name()
                )
                .into());
            }

            let distance = get_haversine_distance(&source, &destination);

            Ok(Leg { distance, duration: distance / speed, geometry: vec![source, destination] })
        })
    }
}

/// A directions service backed by a precomputed routing matrix in row-major order.
pub struct MatrixDirections {
    size: usize,
    distances: Arc<Vec<f64>>,
    durations: Arc<Vec<f64>>,
    error_codes: Option<Arc<Vec<i64>>>,
}

impl MatrixDirections {
    /// Creates a new instance of `MatrixDirections`. A non-zero error code marks a lookup as failed.
    pub fn new(
        size: usize,
        distances: Vec<f64>,
        durations: Vec<f64>,
        error_codes: Option<Vec<i64>>,
    ) -> GenericResult<Self> {
        let expected = size * size;
        let counts = entry_counts(&distances, &durations, error_codes.as_deref());

        if counts.iter().any(|&actual| actual != expected) {
            return Err(format!("routing matrix must have {expected} entries for {size} locations").into());
        }

        if distances.iter().chain(durations.iter()).any(|value| !value.is_finite() || *value < 0.) {
            return Err("routing matrix contains negative or not finite values".into());
        }

        Ok(Self {
            size,
            distances: Arc::new(distances),
            durations: Arc::new(durations),
            error_codes: error_codes.map(Arc::new),
        })
    }
}

impl DirectionsService for MatrixDirections {
    fn directions(&self, request: DirectionsRequest) -> LegFuture {
        let (from, to) = (request.from.index, request.to.index);

        let result = if from >= self.size || to >= self.size {
            Err(format!("routing matrix has no entry for {from} -> {to}").into())
        } else {
            let offset = from * self.size + to;
            match self.error_codes.as_ref().map_or(0, |codes| codes[offset]) {
                0 => Ok(Leg {
                    distance: self.distances[offset],
                    duration: self.durations[offset],
                    geometry: vec![request.source.coordinate, request.destination.coordinate],
                }),
                code => Err(format!(
                    "no route from '{}' to '{}', error code: {code}",
                    request.source.display_name(),
                    request.destination.display_name()
                )
                .into()),
            }
        };

        Box::pin(async move { result })
    }
}

fn entry_counts(distances: &[f64], durations: &[f64], error_codes: Option<&[i64]>) -> Vec<usize> {
    [Some(distances.len()), Some(durations.len()), error_codes.map(|codes| codes.len())].into_iter().flatten().collect()
}

/// Gets distance in meters between two points using haversine formula.
pub fn get_haversine_distance(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let d_lat = degree_rad(p1.lat - p2.lat);
    let d_lng = degree_rad(p1.lng - p2.lng);

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    let a =
        (d_lat / 2.).sin() * (d_lat / 2.).sin() + (d_lng / 2.).sin() * (d_lng / 2.).sin() * (lat1).cos() * (lat2).cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    let radius = wgs84_earth_radius(d_lat);

    radius * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}

#[inline(always)]
fn wgs84_earth_radius(lat: f64) -> f64 {
    // semi-axes of WGS-84 geoidal reference
    const WGS84_A: f64 = 6_378_137.0; // major semiaxis [m]
    const WGS84_B: f64 = 6_356_752.3; // minor semiaxis [m]

    let an = WGS84_A * WGS84_A * lat.cos();
    let bn = WGS84_B * WGS84_B * lat.sin();
    let ad = WGS84_A * lat.cos();
    let bd = WGS84_B * lat.sin();

    ((an * an + bn * bn) / (ad * ad + bd * bd)).sqrt()
}
