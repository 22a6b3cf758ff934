//! The routing module contains the boundary to an external directions service and the logic
//! to populate a distance matrix from it.

use crate::models::{Leg, Location, Stop};
use crate::utils::{GenericError, GenericResult};
use std::future::Future;
use std::pin::Pin;

mod builder;
pub use self::builder::MatrixBuilder;

mod services;
pub use self::services::*;

/// A future which resolves into a leg or a lookup error.
pub type LegFuture = Pin<Box<dyn Future<Output = GenericResult<Leg>> + Send + 'static>>;

/// A request for directions between two stops.
#[derive(Clone, Debug)]
pub struct DirectionsRequest {
    /// A source location.
    pub from: Location,
    /// A destination location.
    pub to: Location,
    /// A source stop.
    pub source: Stop,
    /// A destination stop.
    pub destination: Stop,
}

/// Provides travel information between two stops, asynchronously.
pub trait DirectionsService: Send + Sync {
    /// Starts a lookup of directions for the given request.
    fn directions(&self, request: DirectionsRequest) -> LegFuture;
}

/// Receives errors of individual directions lookups.
pub trait ErrorReporter: Send + Sync {
    /// Reports a failed lookup between two locations.
    fn report(&self, from: Location, to: Location, error: &GenericError);
}

impl<F> ErrorReporter for F
where
    F: Fn(Location, Location, &GenericError) + Send + Sync,
{
    fn report(&self, from: Location, to: Location, error: &GenericError) {
        self(from, to, error)
    }
}
