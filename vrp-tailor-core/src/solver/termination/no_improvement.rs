#[cfg(test)]
#[path = "../../../tests/unit/solver/termination/no_improvement_test.rs"]
mod no_improvement_test;

use super::*;
use crate::models::common::Cost;
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// A termination criteria which fires when the best cost has not strictly improved during
/// the given amount of consecutive iterations.
pub struct MaxIterationsWithoutImprovement {
    limit: usize,
    best_cost: Option<Cost>,
    iterations_without_improvement: usize,
}

impl MaxIterationsWithoutImprovement {
    /// Creates a new instance of `MaxIterationsWithoutImprovement`.
    pub fn new(limit: usize) -> Self {
        Self { limit, best_cost: None, iterations_without_improvement: 0 }
    }
}

impl Termination for MaxIterationsWithoutImprovement {
    fn name(&self) -> &'static str {
        "no-improvement"
    }

    fn on_search_start(&mut self) {
        self.best_cost = None;
        self.iterations_without_improvement = 0;
    }

    fn is_termination(&mut self, ctx: &IterationContext) -> bool {
        let is_improvement = match (ctx.best_cost(), self.best_cost) {
            (Some(cost), Some(best_cost)) => compare_floats(cost, best_cost) == Ordering::Less,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if is_improvement {
            self.best_cost = ctx.best_cost();
            self.iterations_without_improvement = 0;
        } else {
            self.iterations_without_improvement += 1;
        }

        self.iterations_without_improvement >= self.limit
    }
}
