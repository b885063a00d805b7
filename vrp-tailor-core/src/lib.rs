//! Core crate contains the building blocks which shape a metaheuristic search for a
//! ***Vehicle Routing Problem***: what a route leg costs, how a whole solution is ranked,
//! when the search stops, and how the best solution is kept safe while the search is running.
//!
//! # Key points
//!
//! - a cost matrix built from plain text distance and duration tables
//! - transport costs with an optional locality smoothing, see [`models::problem::TransportCost`]
//! - sum and bottleneck objectives with an unassigned jobs penalty, see [`solver::objectives`]
//! - composable termination criteria, see [`solver::termination`]
//! - best solution tracking with crash safe persistence, see [`solver::tracking`]
//!
//! The search engine which proposes candidates is exchangeable, see [`solver::search::Search`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod format;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
