//! A reference ruin and recreate search which proposes candidate solutions.
//!
//! The driver in [`crate::solver`] only relies on the [`Search`] trait, so another engine can
//! be plugged in without touching objectives, termination or tracking.

#[cfg(test)]
#[path = "../../../tests/unit/solver/search/search_test.rs"]
mod search_test;

mod insertion;
mod ruin;

mod schedule;
pub use self::schedule::schedule_route;

use self::insertion::{Tour, insert_jobs};
use self::ruin::ruin_jobs;
use crate::models::problem::Problem;
use crate::models::solution::{RouteStates, Solution};
use crate::utils::{Environment, GenericResult};
use rand::rngs::SmallRng;

/// A default amount of candidates produced per iteration.
pub const DEFAULT_POOL_SIZE: usize = 4;

/// A default range of ruined jobs share.
pub const DEFAULT_RUIN_RATIO: (f64, f64) = (0.1, 0.3);

/// A not yet evaluated solution with its route state snapshot.
pub struct Candidate {
    /// A solution.
    pub solution: Solution,
    /// Route states, one per solution route.
    pub states: RouteStates,
}

/// Proposes candidate solutions.
pub trait Search {
    /// Creates an initial solution.
    fn create_initial(&self, problem: &Problem, environment: &Environment) -> GenericResult<Candidate>;

    /// Creates new candidates from the current best solution.
    fn explore(&self, problem: &Problem, current: &Solution, environment: &Environment)
    -> GenericResult<Vec<Candidate>>;
}

/// Removes a random share of jobs from the current solution and inserts them back using the
/// cheapest insertion. Candidates are built in parallel on the environment thread pool.
pub struct RuinRecreateSearch {
    pool_size: usize,
    ruin_ratio: (f64, f64),
}

impl RuinRecreateSearch {
    /// Creates a new instance of `RuinRecreateSearch`.
    pub fn new(pool_size: usize, ruin_ratio: (f64, f64)) -> Self {
        let (min, max) = ruin_ratio;
        let min = min.clamp(0., 1.);

        Self { pool_size: pool_size.max(1), ruin_ratio: (min, max.clamp(min, 1.)) }
    }
}

impl Default for RuinRecreateSearch {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_RUIN_RATIO)
    }
}

impl Search for RuinRecreateSearch {
    fn create_initial(&self, problem: &Problem, environment: &Environment) -> GenericResult<Candidate> {
        let mut rng = environment.random.get_rng();
        let (tours, unassigned) = insert_jobs(problem, Vec::default(), problem.jobs.clone(), &mut rng)?;

        Ok(Tour::into_candidate(tours, unassigned))
    }

    fn explore(
        &self,
        problem: &Problem,
        current: &Solution,
        environment: &Environment,
    ) -> GenericResult<Vec<Candidate>> {
        let rngs = (0..self.pool_size).map(|_| environment.random.get_rng()).collect::<Vec<_>>();

        environment
            .parallelism
            .thread_pool()
            .map_collect(rngs, |mut rng| self.ruin_and_recreate(problem, current, &mut rng))
            .into_iter()
            .collect()
    }
}

impl RuinRecreateSearch {
    fn ruin_and_recreate(&self, problem: &Problem, current: &Solution, rng: &mut SmallRng) -> GenericResult<Candidate> {
        let (tours, mut removed) = ruin_jobs(problem, current, self.ruin_ratio, rng)?;
        removed.extend(current.unassigned.iter().cloned());

        let (tours, unassigned) = insert_jobs(problem, tours, removed, rng)?;

        Ok(Tour::into_candidate(tours, unassigned))
    }
}
