#[cfg(test)]
#[path = "../../tests/unit/planner/assembler_test.rs"]
mod assembler_test;

use crate::models::{Coordinate, DistanceMatrix, Leg, Location, Stop, Tour};
use crate::utils::GenericResult;

/// A leg of the assembled route between two consecutive stops.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSegment {
    /// A source location.
    pub from: Location,
    /// A destination location.
    pub to: Location,
    /// Travel information between source and destination.
    pub leg: Leg,
}

/// An assembled round trip which starts and ends at the start stop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteResult {
    /// Display names in visiting order, the start is repeated at the end.
    pub names: Vec<String>,
    /// Route segments in visiting order.
    pub segments: Vec<RouteSegment>,
    /// Stop coordinates in visiting order, the start is repeated at the end.
    pub waypoints: Vec<Coordinate>,
    /// A sum of segment distances.
    pub total_distance: f64,
    /// A sum of segment durations.
    pub total_duration: f64,
}

/// Rotates a cyclic order so that it begins with `start` and appends `start` again to close
/// the cycle. Relative order of other locations is preserved. Returns `None` when `start` is
/// not part of the order.
pub fn rotate_to_start(order: &[Location], start: Location) -> Option<Vec<Location>> {
    let position = order.iter().position(|&location| location == start)?;

    let mut cycle = order[position..].iter().chain(order[..position].iter()).copied().collect::<Vec<_>>();
    cycle.push(start);

    Some(cycle)
}

/// Maps the tour back to stops and matrix legs. Zero stops produce an empty route, a single
/// stop produces a route without segments.
pub fn assemble_route(tour: &Tour, stops: &[Stop], matrix: &DistanceMatrix) -> GenericResult<RouteResult> {
    if stops.len() != matrix.size() {
        return Err(format!("matrix size {} does not match amount of stops {}", matrix.size(), stops.len()).into());
    }

    if !tour.is_permutation_of(stops.len()) {
        return Err(format!("tour does not visit each of {} stops exactly once", stops.len()).into());
    }

    match stops {
        [] => return Ok(RouteResult::default()),
        [single] => {
            return Ok(RouteResult {
                names: vec![single.display_name().to_string()],
                waypoints: vec![single.coordinate],
                ..RouteResult::default()
            });
        }
        _ => {}
    }

    let cycle = rotate_to_start(tour.order(), Location::START).ok_or("tour has no start location")?;

    let segments = cycle
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            matrix.leg(from, to).cloned().map(|leg| RouteSegment { from, to, leg }).ok_or_else(|| {
                let (source, destination) = (stops[from.index].display_name(), stops[to.index].display_name());
                format!("no directions from '{source}' to '{destination}'").into()
            })
        })
        .collect::<GenericResult<Vec<_>>>()?;

    Ok(RouteResult {
        names: cycle.iter().map(|location| stops[location.index].display_name().to_string()).collect(),
        waypoints: cycle.iter().map(|location| stops[location.index].coordinate).collect(),
        total_distance: segments.iter().map(|segment| segment.leg.distance).sum(),
        total_duration: segments.iter().map(|segment| segment.leg.duration).sum(),
        segments,
    })
}
