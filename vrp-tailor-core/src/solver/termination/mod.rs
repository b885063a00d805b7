//! The termination module contains logic which defines when the search should stop.
//!
//! Each criterion keeps its own rolling state and is updated once per completed iteration.
//! Criteria are combined with logical OR by [`CompositeTermination`].

#[cfg(test)]
#[path = "../../../tests/unit/solver/termination/composite_test.rs"]
mod composite_test;

use crate::solver::IterationContext;

/// A trait which specifies criteria when metaheuristic should stop searching for improved solution.
pub trait Termination {
    /// Returns a short name of the criteria.
    fn name(&self) -> &'static str;

    /// Called once before the first iteration.
    fn on_search_start(&mut self) {}

    /// Updates internal state with iteration results and returns true if termination condition is met.
    fn is_termination(&mut self, ctx: &IterationContext) -> bool;
}

mod interruption;
pub use self::interruption::Interruption;

mod max_iterations;
pub use self::max_iterations::MaxIterations;

mod max_time;
pub use self::max_time::MaxTime;

mod min_variation;
pub use self::min_variation::MinVariation;

mod no_improvement;
pub use self::no_improvement::MaxIterationsWithoutImprovement;

/// Specifies termination state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationState {
    /// The search continues.
    Running,
    /// The search should stop.
    Stopped,
}

/// Encapsulates multiple termination criteria: the search stops as soon as any of them fires.
/// All criteria are updated on every iteration, even when some other fires first.
pub struct CompositeTermination<'a> {
    terminations: Vec<Box<dyn Termination + 'a>>,
    state: TerminationState,
    reason: Option<String>,
}

impl<'a> CompositeTermination<'a> {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + 'a>>) -> Self {
        Self { terminations, state: TerminationState::Running, reason: None }
    }

    /// Returns current state.
    pub fn state(&self) -> TerminationState {
        self.state
    }

    /// Returns names of criteria which caused termination.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl Termination for CompositeTermination<'_> {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn on_search_start(&mut self) {
        self.state = TerminationState::Running;
        self.reason = None;
        self.terminations.iter_mut().for_each(|termination| termination.on_search_start());
    }

    fn is_termination(&mut self, ctx: &IterationContext) -> bool {
        let fired = self
            .terminations
            .iter_mut()
            .filter_map(|termination| termination.is_termination(ctx).then(|| termination.name()))
            .collect::<Vec<_>>();

        if self.state == TerminationState::Running && !fired.is_empty() {
            self.state = TerminationState::Stopped;
            self.reason = Some(fired.join(", "));
        }

        self.state == TerminationState::Stopped
    }
}
