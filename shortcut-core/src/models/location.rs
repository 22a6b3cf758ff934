#[cfg(test)]
#[path = "../../tests/unit/models/location_test.rs"]
mod location_test;

use std::fmt::{Display, Formatter};

/// A name used for stops which have no name.
pub const DEFAULT_STOP_NAME: &str = "Waypoint";

/// An opaque handle which identifies one stop by its position in the input list.
/// The first location (index 0) is the start of the round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// An index of the stop in the input list and in the distance matrix.
    pub index: usize,
}

impl Location {
    /// A location of the start.
    pub const START: Location = Location { index: 0 };

    /// Creates a new instance of `Location`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

/// Creates locations for the given amount of stops.
pub fn create_locations(size: usize) -> Vec<Location> {
    (0..size).map(Location::new).collect()
}

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks whether coordinate is within valid latitude and longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat.abs() <= 90. && self.lng.abs() <= 180.
    }
}

/// A stop supplied by the caller: something to visit, resolved to a coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// An optional display name.
    pub name: Option<String>,
    /// A stop coordinate.
    pub coordinate: Coordinate,
}

impl Stop {
    /// Creates a new instance of `Stop`.
    pub fn new(name: Option<String>, coordinate: Coordinate) -> Self {
        Self { name, coordinate }
    }

    /// Returns a name to display, unnamed stops are displayed with a default name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|name| !name.trim().is_empty()).unwrap_or(DEFAULT_STOP_NAME)
    }
}
