//! A command line front-end for the round trip planner: reads stops from a JSON problem file,
//! resolves travel costs either approximately or from a routing matrix file, evolves a visiting
//! order and writes the assembled route as JSON.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;

use shortcut_core::evolution::EvolutionConfig;
use shortcut_core::models::{Location, Stop};
use shortcut_core::planner::{PlannedRoute, Planner};
use shortcut_core::routing::DirectionsService;
use shortcut_core::utils::GenericError;
use std::sync::Arc;

/// Plans a round trip through stops on a dedicated runtime. Failed directions lookups are
/// written to stderr and make planning fail.
pub fn plan_route(
    stops: Vec<Stop>,
    service: Arc<dyn DirectionsService>,
    config: EvolutionConfig,
) -> Result<PlannedRoute, String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("cannot create runtime: '{err}'"))?;

    let reporter = Arc::new(|from: Location, to: Location, err: &GenericError| {
        eprintln!("cannot get directions from {from} to {to}: '{err}'");
    });

    let planner = Planner::new(service, reporter);

    runtime.block_on(planner.plan(stops, config)).map_err(|err| format!("cannot plan route: '{err}'"))
}
