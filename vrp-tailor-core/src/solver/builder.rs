use super::*;
use crate::solver::objectives::{ObjectiveKind, UnassignedPenalty, create_objective};
use crate::solver::search::RuinRecreateSearch;
use crate::solver::termination::MaxIterations;

/// A default amount of iterations used when no termination criteria is specified.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Provides configurable way to build a solver.
pub struct SolverBuilder<'a> {
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    objective: Option<Arc<dyn SolutionCost + Send + Sync>>,
    search: Option<Box<dyn Search + Send + Sync + 'a>>,
    terminations: Vec<Box<dyn Termination + 'a>>,
    listeners: Vec<Box<dyn IterationListener + 'a>>,
}

impl<'a> SolverBuilder<'a> {
    /// Creates a new instance of `SolverBuilder`.
    pub fn new(problem: Arc<Problem>, environment: Arc<Environment>) -> Self {
        Self { problem, environment, objective: None, search: None, terminations: vec![], listeners: vec![] }
    }

    /// Sets objective used to rank solutions.
    /// Default is sum of route costs with default unassigned penalty.
    pub fn with_objective(mut self, objective: Arc<dyn SolutionCost + Send + Sync>) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Sets search engine.
    /// Default is ruin and recreate with default parameters.
    pub fn with_search(mut self, search: Box<dyn Search + Send + Sync + 'a>) -> Self {
        self.search = Some(search);
        self
    }

    /// Adds termination criteria, criteria are combined with logical OR.
    /// Default is max iterations criteria with [`DEFAULT_MAX_ITERATIONS`] limit.
    pub fn add_termination(mut self, termination: Box<dyn Termination + 'a>) -> Self {
        self.terminations.push(termination);
        self
    }

    /// Adds iteration listener, listeners are called in the order they were added.
    pub fn add_listener(mut self, listener: Box<dyn IterationListener + 'a>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Builds a solver.
    pub fn build(self) -> Solver<'a> {
        let mut terminations = self.terminations;
        if terminations.is_empty() {
            terminations.push(Box::new(MaxIterations::new(DEFAULT_MAX_ITERATIONS)));
        }

        (self.environment.logger)(&format!(
            "configured {} termination criteria: {}",
            terminations.len(),
            terminations.iter().map(|termination| termination.name()).collect::<Vec<_>>().join(", ")
        ));

        Solver {
            problem: self.problem,
            environment: self.environment,
            objective: self
                .objective
                .unwrap_or_else(|| create_objective(ObjectiveKind::Sum, UnassignedPenalty::default())),
            search: self.search.unwrap_or_else(|| Box::new(RuinRecreateSearch::default())),
            termination: CompositeTermination::new(terminations),
            listeners: self.listeners,
        }
    }
}
