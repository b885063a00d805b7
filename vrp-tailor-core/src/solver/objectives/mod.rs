//! Objectives rank whole candidate solutions: lower fitness is strictly better.
//!
//! An objective is evaluated concurrently from evaluation threads, so implementations are pure
//! functions of a solution and a route state snapshot.

#[cfg(test)]
#[path = "../../../tests/unit/solver/objectives/objectives_test.rs"]
mod objectives_test;

mod bottleneck_cost;
pub use self::bottleneck_cost::BottleneckCost;

mod sum_cost;
pub use self::sum_cost::SumCost;

use crate::models::common::Cost;
use crate::models::solution::{RouteStates, Solution};
use std::sync::Arc;

/// A default weight of unassigned jobs penalty.
pub const DEFAULT_UNASSIGNED_WEIGHT: f64 = 0.5;

/// Calculates a scalar fitness of the solution.
pub trait SolutionCost {
    /// Returns solution fitness, `states` contains one state per solution route in the same order.
    fn fitness(&self, solution: &Solution, states: &RouteStates) -> Cost;
}

/// Specifies which objective is used to rank solutions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectiveKind {
    /// Minimizes total cost of all routes.
    Sum,
    /// Minimizes cost of the most expensive route.
    Bottleneck,
}

/// Penalizes unassigned jobs proportionally to the already incurred cost, so a cheap solution
/// with many unassigned jobs does not look artificially good.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnassignedPenalty {
    weight: f64,
}

impl UnassignedPenalty {
    /// Creates a new instance of `UnassignedPenalty`.
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Returns penalty weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Adds the penalty to the base cost.
    pub fn apply(&self, base_cost: Cost, unassigned: usize) -> Cost {
        base_cost + unassigned as f64 * (1. + base_cost) * self.weight
    }
}

impl Default for UnassignedPenalty {
    fn default() -> Self {
        Self::new(DEFAULT_UNASSIGNED_WEIGHT)
    }
}

/// Creates an objective of the given kind. The choice is done once, before the search starts.
pub fn create_objective(kind: ObjectiveKind, penalty: UnassignedPenalty) -> Arc<dyn SolutionCost + Send + Sync> {
    match kind {
        ObjectiveKind::Sum => Arc::new(SumCost::new(penalty)),
        ObjectiveKind::Bottleneck => Arc::new(BottleneckCost::new(penalty)),
    }
}

/// Returns cost of each route: aggregated transport cost plus vehicle fixed cost. The caller
/// provides exactly one state per route.
fn get_route_costs<'a>(solution: &'a Solution, states: &'a RouteStates) -> impl Iterator<Item = Cost> + 'a {
    debug_assert_eq!(solution.routes.len(), states.len(), "route states snapshot does not match solution routes");

    solution.routes.iter().zip(states.iter()).map(|(route, state)| state.transport_cost + route.vehicle.costs.fixed)
}
