use super::{Candidate, schedule_route};
use crate::models::common::Cost;
use crate::models::problem::{Job, Problem, Vehicle};
use crate::models::solution::{Route, RouteState, RouteStates, Solution};
use crate::utils::{GenericResult, compare_floats};
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cmp::Ordering;
use std::sync::Arc;

/// A scheduled route with the job order it was built from.
pub(crate) struct Tour {
    pub jobs: Vec<Arc<Job>>,
    pub route: Route,
    pub state: RouteState,
}

impl Tour {
    pub fn vehicle(&self) -> &Arc<Vehicle> {
        &self.route.vehicle
    }

    /// Converts tours into a not evaluated candidate.
    pub fn into_candidate(tours: Vec<Tour>, unassigned: Vec<Arc<Job>>) -> Candidate {
        let (routes, states): (Vec<_>, Vec<_>) = tours.into_iter().map(|tour| (tour.route, tour.state)).unzip();

        Candidate { solution: Solution::new(routes, unassigned), states: RouteStates::new(states) }
    }
}

struct InsertionSuccess {
    cost: Cost,
    tour_idx: Option<usize>,
    tour: Tour,
}

/// Inserts jobs one by one, in random order, at their cheapest feasible position. A job which
/// cannot be inserted anywhere is returned as unassigned.
pub(crate) fn insert_jobs(
    problem: &Problem,
    mut tours: Vec<Tour>,
    mut jobs: Vec<Arc<Job>>,
    rng: &mut SmallRng,
) -> GenericResult<(Vec<Tour>, Vec<Arc<Job>>)> {
    jobs.shuffle(rng);

    let mut unassigned = Vec::default();

    for job in jobs {
        match find_cheapest_insertion(problem, &tours, &job)? {
            Some(InsertionSuccess { tour_idx: Some(idx), tour, .. }) => tours[idx] = tour,
            Some(InsertionSuccess { tour_idx: None, tour, .. }) => tours.push(tour),
            None => unassigned.push(job),
        }
    }

    Ok((tours, unassigned))
}

fn find_cheapest_insertion(
    problem: &Problem,
    tours: &[Tour],
    job: &Arc<Job>,
) -> GenericResult<Option<InsertionSuccess>> {
    let mut best: Option<InsertionSuccess> = None;

    let mut accept = |success: InsertionSuccess| {
        if best.as_ref().is_none_or(|best| compare_floats(success.cost, best.cost) == Ordering::Less) {
            best = Some(success);
        }
    };

    for (tour_idx, tour) in tours.iter().enumerate() {
        if !tour.vehicle().can_serve(job) {
            continue;
        }

        for position in 0..=tour.jobs.len() {
            let mut jobs = tour.jobs.clone();
            jobs.insert(position, job.clone());

            if let Some((route, state)) = schedule_route(problem, tour.vehicle(), jobs.as_slice())? {
                let cost = state.transport_cost - tour.state.transport_cost;
                accept(InsertionSuccess { cost, tour_idx: Some(tour_idx), tour: Tour { jobs, route, state } });
            }
        }
    }

    let unused = problem
        .fleet
        .iter()
        .filter(|vehicle| vehicle.can_serve(job))
        .filter(|vehicle| !tours.iter().any(|tour| Arc::ptr_eq(tour.vehicle(), vehicle)));

    for vehicle in unused {
        let jobs = vec![job.clone()];
        if let Some((route, state)) = schedule_route(problem, vehicle, jobs.as_slice())? {
            let cost = state.transport_cost + vehicle.costs.fixed;
            accept(InsertionSuccess { cost, tour_idx: None, tour: Tour { jobs, route, state } });
        }
    }

    Ok(best)
}
