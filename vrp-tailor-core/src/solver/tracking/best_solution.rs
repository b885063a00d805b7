#[cfg(test)]
#[path = "../../../tests/unit/solver/tracking/best_solution_test.rs"]
mod best_solution_test;

use super::*;
use crate::models::common::Cost;
use crate::models::solution::get_best_solution;
use crate::utils::{InfoLogger, compare_floats};
use std::cmp::Ordering;

/// Keeps the best solution observed during the search. Owned by the caller and lent to
/// the tracker, so it stays readable once the search is over.
#[derive(Default)]
pub struct BestSolutionState {
    solution: Option<Solution>,
}

impl BestSolutionState {
    /// Creates a new instance of `BestSolutionState`, optionally seeded with a known solution.
    pub fn new(solution: Option<Solution>) -> Self {
        Self { solution }
    }

    /// Returns the best known solution.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Returns cost of the best known solution.
    pub fn cost(&self) -> Option<Cost> {
        self.solution.as_ref().and_then(|solution| solution.cost)
    }

    fn is_improved_by(&self, cost: Cost) -> bool {
        self.cost().is_none_or(|best_cost| compare_floats(cost, best_cost) == Ordering::Less)
    }
}

/// An iteration listener which replaces the tracked best solution when the pool contains a
/// strictly better one. A new best is persisted first and only then becomes the tracked one:
/// a failed write is propagated and leaves the state untouched.
pub struct BestSolutionTracker<'a, W: SolutionWriter> {
    state: &'a mut BestSolutionState,
    writer: W,
    logger: InfoLogger,
}

impl<'a, W: SolutionWriter> BestSolutionTracker<'a, W> {
    /// Creates a new instance of `BestSolutionTracker`.
    pub fn new(state: &'a mut BestSolutionState, writer: W, logger: InfoLogger) -> Self {
        Self { state, writer, logger }
    }
}

impl<W: SolutionWriter> IterationListener for BestSolutionTracker<'_, W> {
    fn on_iteration_end(&mut self, ctx: &IterationContext) -> GenericResult<()> {
        let Some((best, cost)) = get_best_solution(ctx.pool).and_then(|best| best.cost.map(|cost| (best, cost))) else {
            return Ok(());
        };

        if !self.state.is_improved_by(cost) {
            return Ok(());
        }

        self.writer.write(ctx.problem, best)?;
        self.state.solution = Some(best.clone());

        (self.logger)(&format!("iteration {} cost {}", ctx.iteration, cost));

        Ok(())
    }
}
