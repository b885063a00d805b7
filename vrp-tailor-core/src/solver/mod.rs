//! The solver module drives the search: it asks a search engine for candidates, ranks them with
//! an objective, notifies iteration listeners and checks termination once per iteration.
//!
//! # Examples
//!
//! ```
//! # use vrp_tailor_core::prelude::*;
//! # use vrp_tailor_core::models::problem::create_transport_cost;
//! # use vrp_tailor_core::solver::termination::MaxIterations;
//! # use std::sync::Arc;
//! let matrix = CostMatrixBuilder::default().with_distances(vec![vec![0., 1.], vec![1., 0.]]).build()?;
//! let transport = create_transport_cost(Arc::new(matrix), None);
//! let problem = Arc::new(Problem::new(vec![], vec![], transport)?);
//!
//! let outcome = SolverBuilder::new(problem, Arc::new(Environment::default()))
//!     .add_termination(Box::new(MaxIterations::new(10)))
//!     .build()
//!     .solve()?;
//!
//! assert_eq!(outcome.iterations, 10);
//! # Ok::<(), GenericError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

pub mod objectives;
pub mod search;
pub mod termination;
pub mod tracking;

mod builder;
pub use self::builder::{DEFAULT_MAX_ITERATIONS, SolverBuilder};

use crate::models::common::Cost;
use crate::models::problem::Problem;
use crate::models::solution::{Solution, get_best_solution};
use crate::solver::objectives::SolutionCost;
use crate::solver::search::{Candidate, Search};
use crate::solver::termination::{CompositeTermination, Termination};
use crate::solver::tracking::IterationListener;
use crate::utils::{Environment, GenericError, GenericResult, Timer};
use std::sync::Arc;

/// Contains information about a completed iteration.
pub struct IterationContext<'a> {
    /// Iteration index, starts from 1.
    pub iteration: usize,
    /// Original problem.
    pub problem: &'a Problem,
    /// Evaluated candidates of the iteration including the best solution known before it.
    pub pool: &'a [Solution],
}

impl IterationContext<'_> {
    /// Returns the lowest cost in the pool.
    pub fn best_cost(&self) -> Option<Cost> {
        get_best_solution(self.pool).and_then(|solution| solution.cost)
    }
}

/// Contains results of the search.
pub struct SolverOutcome {
    /// The best found solution.
    pub solution: Solution,
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Search duration.
    pub elapsed_millis: u128,
    /// Names of termination criteria which stopped the search.
    pub termination_reason: Option<String>,
}

/// A configured solver, use [`SolverBuilder`] to create one.
pub struct Solver<'a> {
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    objective: Arc<dyn SolutionCost + Send + Sync>,
    search: Box<dyn Search + Send + Sync + 'a>,
    termination: CompositeTermination<'a>,
    listeners: Vec<Box<dyn IterationListener + 'a>>,
}

impl Solver<'_> {
    /// Runs the search till one of termination criteria fires. Listener and search errors stop
    /// the search and are returned to the caller.
    pub fn solve(mut self) -> GenericResult<SolverOutcome> {
        let logger = self.environment.logger.clone();
        let timer = Timer::start();

        self.termination.on_search_start();

        let initial = self.search.create_initial(self.problem.as_ref(), self.environment.as_ref())?;
        let mut current = self
            .evaluate(vec![initial])
            .pop()
            .ok_or_else(|| GenericError::from("cannot create initial solution"))?;

        (logger)(&format!(
            "initial solution: cost {}, assigned {}, unassigned {}",
            current.cost.unwrap_or_default(),
            current.assigned_count(),
            current.unassigned.len()
        ));

        let mut iteration = 0;
        loop {
            iteration += 1;

            let candidates = self.search.explore(self.problem.as_ref(), &current, self.environment.as_ref())?;

            let mut pool = Vec::with_capacity(candidates.len() + 1);
            pool.push(current);
            pool.extend(self.evaluate(candidates));

            let ctx = IterationContext { iteration, problem: self.problem.as_ref(), pool: pool.as_slice() };

            self.listeners.iter_mut().try_for_each(|listener| listener.on_iteration_end(&ctx))?;
            let is_terminated = self.termination.is_termination(&ctx);

            current = match get_best_solution(pool.as_slice()) {
                Some(best) => best.clone(),
                None => pool.swap_remove(0),
            };

            if is_terminated {
                break;
            }
        }

        self.listeners.iter_mut().try_for_each(|listener| listener.on_search_end(self.problem.as_ref()))?;

        let termination_reason = self.termination.reason().map(|reason| reason.to_string());
        let elapsed_millis = timer.elapsed_millis();

        (logger)(&format!(
            "search stopped by '{}' after {} iterations in {}ms, best cost {}",
            termination_reason.as_deref().unwrap_or("unknown"),
            iteration,
            elapsed_millis,
            current.cost.unwrap_or_default()
        ));

        Ok(SolverOutcome { solution: current, iterations: iteration, elapsed_millis, termination_reason })
    }

    /// Assigns fitness to candidates using the worker thread pool.
    fn evaluate(&self, candidates: Vec<Candidate>) -> Vec<Solution> {
        let objective = self.objective.as_ref();

        self.environment.parallelism.thread_pool().map_collect(candidates, |candidate| {
            let cost = objective.fitness(&candidate.solution, &candidate.states);
            candidate.solution.with_cost(cost)
        })
    }
}
