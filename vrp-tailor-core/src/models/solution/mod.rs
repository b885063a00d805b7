//! Solution domain models.

#[cfg(test)]
#[path = "../../../tests/unit/models/solution/solution_test.rs"]
mod solution_test;

mod route;
pub use self::route::*;

use crate::models::common::Cost;
use crate::models::problem::Job;
use crate::utils::compare_floats;
use std::sync::Arc;

/// Represents a candidate solution: routes plus jobs which cannot be assigned. Solution is
/// annotated with a cost once evaluated by an objective.
#[derive(Clone)]
pub struct Solution {
    /// List of assigned routes.
    pub routes: Vec<Route>,
    /// List of unassigned jobs.
    pub unassigned: Vec<Arc<Job>>,
    /// A cost assigned by an objective.
    pub cost: Option<Cost>,
}

impl Solution {
    /// Creates a new not evaluated solution.
    pub fn new(routes: Vec<Route>, unassigned: Vec<Arc<Job>>) -> Self {
        Self { routes, unassigned, cost: None }
    }

    /// Creates a solution without routes where all given jobs are unassigned.
    pub fn unassigned_only(jobs: Vec<Arc<Job>>) -> Self {
        Self::new(vec![], jobs)
    }

    /// Returns the same solution annotated with the cost.
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Returns total amount of assigned jobs.
    pub fn assigned_count(&self) -> usize {
        self.routes.iter().map(|route| route.job_count()).sum()
    }
}

/// Returns the best evaluated solution from the pool, the first one wins on ties.
pub fn get_best_solution(pool: &[Solution]) -> Option<&Solution> {
    pool.iter()
        .filter_map(|solution| solution.cost.map(|cost| (cost, solution)))
        .fold(None, |best: Option<(Cost, &Solution)>, (cost, solution)| match best {
            Some((best_cost, _)) if compare_floats(best_cost, cost).is_le() => best,
            _ => Some((cost, solution)),
        })
        .map(|(_, solution)| solution)
}
