#[cfg(test)]
#[path = "../../tests/unit/routing/builder_test.rs"]
mod builder_test;

use super::*;
use crate::models::DistanceMatrix;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Builds a distance matrix by issuing one directions lookup per ordered pair of stops.
///
/// All lookups run concurrently; the matrix is returned only after every one of them has
/// settled. A failed lookup is passed to the error reporter and still counts as settled.
pub struct MatrixBuilder {
    service: Arc<dyn DirectionsService>,
    reporter: Arc<dyn ErrorReporter>,
}

impl MatrixBuilder {
    /// Creates a new instance of `MatrixBuilder`.
    pub fn new(service: Arc<dyn DirectionsService>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { service, reporter }
    }

    /// Builds a matrix for given stops. Must be called within tokio runtime.
    pub async fn build(&self, stops: &[Stop]) -> GenericResult<DistanceMatrix> {
        let size = stops.len();
        let mut matrix = DistanceMatrix::new(size);

        if size < 2 {
            return Ok(matrix);
        }

        let required = size * size - size;
        let (sender, mut receiver) = mpsc::unbounded_channel();

        (0..size).flat_map(|from| (0..size).map(move |to| (from, to))).filter(|(from, to)| from != to).for_each(
            |(from, to)| {
                let request = DirectionsRequest {
                    from: Location::new(from),
                    to: Location::new(to),
                    source: stops[from].clone(),
                    destination: stops[to].clone(),
                };
                let lookup = self.service.directions(request);
                let sender = sender.clone();

                tokio::spawn(async move {
                    let result = lookup.await;
                    // NOTE receiver is gone only when the build itself was dropped
                    sender.send((Location::new(from), Location::new(to), result)).ok();
                });
            },
        );

        drop(sender);

        let mut resolved = 0_usize;
        while resolved < required {
            let Some((from, to, result)) = receiver.recv().await else {
                return Err(format!("only {resolved} of {required} directions lookups have settled").into());
            };

            resolved += 1;

            match result {
                Ok(leg) => matrix.set_leg(from, to, leg),
                Err(err) => {
                    self.reporter.report(from, to, &err);
                    matrix.mark_failed(from, to);
                }
            }
        }

        Ok(matrix)
    }
}
