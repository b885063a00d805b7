//! Tracking module contains iteration observers: the best solution tracker which persists
//! improvements as soon as they are found and the progress recorder used for debug charts.

mod best_solution;
pub use self::best_solution::{BestSolutionState, BestSolutionTracker};

mod progress;
pub use self::progress::ProgressRecorder;

use crate::models::problem::Problem;
use crate::models::solution::Solution;
use crate::solver::IterationContext;
use crate::utils::GenericResult;

/// Observes the search: called once per completed iteration on the control thread, before
/// termination is checked.
pub trait IterationListener {
    /// Called when iteration ends. An error stops the search.
    fn on_iteration_end(&mut self, ctx: &IterationContext) -> GenericResult<()>;

    /// Called once when search is finished.
    fn on_search_end(&mut self, _problem: &Problem) -> GenericResult<()> {
        Ok(())
    }
}

/// Persists a solution somewhere.
pub trait SolutionWriter {
    /// Writes solution, the call returns when the data is stored.
    fn write(&self, problem: &Problem, solution: &Solution) -> GenericResult<()>;
}

impl<F> SolutionWriter for F
where
    F: Fn(&Problem, &Solution) -> GenericResult<()>,
{
    fn write(&self, problem: &Problem, solution: &Solution) -> GenericResult<()> {
        (self)(problem, solution)
    }
}
