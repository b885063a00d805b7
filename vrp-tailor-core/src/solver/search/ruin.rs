use super::insertion::Tour;
use super::schedule_route;
use crate::models::problem::{Job, Problem};
use crate::models::solution::Solution;
use crate::utils::GenericResult;
use rand::prelude::*;
use rand::rngs::SmallRng;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Removes a random share of assigned jobs from the solution. Returns the remaining tours and
/// removed jobs. A tour which becomes empty or infeasible is dropped and its jobs are removed too.
pub(crate) fn ruin_jobs(
    problem: &Problem,
    solution: &Solution,
    ratio: (f64, f64),
    rng: &mut SmallRng,
) -> GenericResult<(Vec<Tour>, Vec<Arc<Job>>)> {
    let assigned = solution.routes.iter().flat_map(|route| route.jobs().cloned()).collect::<Vec<_>>();
    if assigned.is_empty() {
        return Ok((Vec::default(), Vec::default()));
    }

    let share = if ratio.0 < ratio.1 { rng.gen_range(ratio.0..=ratio.1) } else { ratio.0 };
    let amount = ((assigned.len() as f64 * share).round() as usize).clamp(1, assigned.len());

    let mut removed = assigned.choose_multiple(rng, amount).cloned().collect::<Vec<_>>();
    let removed_ids = removed.iter().map(|job| job.id.as_str()).collect::<FxHashSet<_>>();

    let mut tours = Vec::with_capacity(solution.routes.len());
    let mut dropped = Vec::default();

    for route in solution.routes.iter() {
        let jobs = route.jobs().filter(|job| !removed_ids.contains(job.id.as_str())).cloned().collect::<Vec<_>>();
        if jobs.is_empty() {
            continue;
        }

        match schedule_route(problem, &route.vehicle, jobs.as_slice())? {
            Some((route, state)) => tours.push(Tour { jobs, route, state }),
            None => dropped.extend(jobs),
        }
    }

    removed.extend(dropped);

    Ok((tours, removed))
}
