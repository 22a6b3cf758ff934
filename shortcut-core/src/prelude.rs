//! This module reimports a common used types.

pub use crate::models::{Coordinate, DistanceMatrix, Leg, Location, Stop, Tour};

pub use crate::routing::{ApproxDirections, DirectionsRequest, DirectionsService, ErrorReporter, MatrixBuilder};

pub use crate::evolution::{EvolutionConfig, EvolutionConfigBuilder, GenerationReport};
pub use crate::evolution::{InfoLogger, TelemetryMetrics, TelemetryMode};

pub use crate::planner::{Optimizer, PlannedRoute, Planner, RouteResult, RouteSegment, RunHandle};

pub use crate::termination::Termination;

pub use crate::utils::compare_floats;
pub use crate::utils::{CancellationQuota, CompositeQuota, Quota};
pub use crate::utils::{DefaultRandom, Environment, Random, RepeatableRandom};
pub use crate::utils::{GenericError, GenericResult};
