#[cfg(test)]
#[path = "../../../tests/unit/solver/termination/min_variation_test.rs"]
mod min_variation_test;

use super::*;
use crate::models::common::Cost;
use crate::utils::get_cv;
use std::collections::VecDeque;

/// A termination criteria which calculates coefficient of variation over the last best costs
/// and terminates when it falls below the threshold: the search has converged even if the best
/// cost still improves slightly.
pub struct MinVariation {
    sample: usize,
    threshold: f64,
    best_cost: Option<Cost>,
    values: VecDeque<Cost>,
}

impl MinVariation {
    /// Creates a new instance of `MinVariation` with given window size and threshold.
    /// Window size is at least one.
    pub fn new(sample: usize, threshold: f64) -> Self {
        let sample = sample.max(1);

        Self { sample, threshold, best_cost: None, values: VecDeque::with_capacity(sample + 1) }
    }
}

impl Termination for MinVariation {
    fn name(&self) -> &'static str {
        "min-variation"
    }

    fn on_search_start(&mut self) {
        self.best_cost = None;
        self.values.clear();
    }

    fn is_termination(&mut self, ctx: &IterationContext) -> bool {
        let Some(cost) = ctx.best_cost() else {
            return false;
        };

        let best_cost = self.best_cost.map_or(cost, |best_cost| best_cost.min(cost));
        self.best_cost = Some(best_cost);

        self.values.push_back(best_cost);
        if self.values.len() > self.sample {
            self.values.pop_front();
        }

        self.values.len() == self.sample && get_cv(self.values.make_contiguous()) < self.threshold
    }
}
