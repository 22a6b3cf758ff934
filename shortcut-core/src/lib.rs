//! This crate plans a round trip through a handful of stops: it builds a pairwise travel cost
//! matrix by querying a directions service concurrently, then evolves visiting orders with a
//! genetic algorithm and assembles the best one into an ordered route which starts and ends
//! at the first stop.
//!
//! The main entry points are [`planner::Optimizer`] (build / optimize / cancel) and
//! [`planner::Planner`] which runs the whole pipeline at once.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod models;
pub mod planner;
pub mod prelude;
pub mod routing;
pub mod termination;
pub mod utils;
