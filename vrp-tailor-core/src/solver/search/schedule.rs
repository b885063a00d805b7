#[cfg(test)]
#[path = "../../../tests/unit/solver/search/schedule_test.rs"]
mod schedule_test;

use crate::models::common::{Cost, Demand, Location, Timestamp};
use crate::models::problem::{Job, JobKind, Problem, Vehicle, VehicleBreak};
use crate::models::solution::{Activity, ActivityKind, Route, RouteState};
use crate::utils::{GenericResult, compare_floats};
use std::sync::Arc;

/// Schedules jobs in the given order on the vehicle. Returns `None` when the route violates
/// capacity, skills, job time windows, vehicle shift or break time window.
///
/// A vehicle break is taken at the current location right before the leg which would otherwise
/// arrive after the end of the break time window.
pub fn schedule_route(
    problem: &Problem,
    vehicle: &Arc<Vehicle>,
    jobs: &[Arc<Job>],
) -> GenericResult<Option<(Route, RouteState)>> {
    if !jobs.iter().all(|job| vehicle.can_serve(job)) || !has_valid_load(vehicle.capacity, jobs) {
        return Ok(None);
    }

    let transport = problem.transport.as_ref();
    let shift_start = vehicle.shift.start;

    let mut activities = Vec::with_capacity(jobs.len() + 3);
    activities.push(Activity {
        kind: ActivityKind::Start,
        job: None,
        location: Some(vehicle.start.clone()),
        arrival: shift_start,
        departure: shift_start,
    });

    let mut pending_break = vehicle.vehicle_break.as_ref();
    let mut transport_cost: Cost = 0.;
    let mut departure = shift_start;

    for job in jobs {
        let prev = get_last_location(activities.as_slice());
        let setup_duration = match prev.as_ref() {
            Some(prev) if *prev == job.location => 0.,
            _ => job.setup_duration,
        };

        let to = Some(&job.location);
        let travel = transport.duration(prev.as_ref(), to, departure, setup_duration, Some(vehicle))?;

        let next_arrival = departure + travel;
        if !try_take_break(&mut pending_break, &mut activities, prev.as_ref(), &mut departure, next_arrival) {
            return Ok(None);
        }

        transport_cost += transport.cost(prev.as_ref(), to, departure, setup_duration, Some(vehicle))?;
        let arrival = departure + travel;

        let Some(service_start) = get_service_start(job, arrival) else {
            return Ok(None);
        };

        departure = service_start + setup_duration * vehicle.costs.setup_time_coefficient + job.duration;
        activities.push(Activity {
            kind: ActivityKind::Job,
            job: Some(job.clone()),
            location: Some(job.location.clone()),
            arrival,
            departure,
        });
    }

    let prev = get_last_location(activities.as_slice());
    let end = vehicle.end.as_ref();
    let travel = transport.duration(prev.as_ref(), end, departure, 0., Some(vehicle))?;

    let next_arrival = departure + travel;
    if !try_take_break(&mut pending_break, &mut activities, prev.as_ref(), &mut departure, next_arrival) {
        return Ok(None);
    }

    transport_cost += transport.cost(prev.as_ref(), end, departure, 0., Some(vehicle))?;
    let end_arrival = departure + travel;

    if end_arrival > vehicle.shift.end {
        return Ok(None);
    }

    activities.push(Activity {
        kind: ActivityKind::End,
        job: None,
        location: vehicle.end.clone(),
        arrival: end_arrival,
        departure: end_arrival,
    });

    let state = RouteState { transport_cost, duration: end_arrival - shift_start };

    Ok(Some((Route { vehicle: vehicle.clone(), activities }, state)))
}

fn get_last_location(activities: &[Activity]) -> Option<Location> {
    activities.last().and_then(|activity| activity.location.clone())
}

/// Takes the pending break when the next arrival is after its time window. Returns false when
/// the break cannot start within the time window anymore.
fn try_take_break(
    pending_break: &mut Option<&VehicleBreak>,
    activities: &mut Vec<Activity>,
    location: Option<&Location>,
    departure: &mut Timestamp,
    next_arrival: Timestamp,
) -> bool {
    let Some(vehicle_break) = (*pending_break).filter(|vehicle_break| next_arrival > vehicle_break.time_window.end)
    else {
        return true;
    };

    let start = departure.max(vehicle_break.time_window.start);
    if start > vehicle_break.time_window.end {
        return false;
    }

    let arrival = *departure;
    *departure = start + vehicle_break.duration;
    *pending_break = None;

    activities.push(Activity {
        kind: ActivityKind::Break,
        job: None,
        location: location.cloned(),
        arrival,
        departure: *departure,
    });

    true
}

/// Checks that the load never exceeds capacity: deliveries are loaded at route start, pickups
/// stay on board till route end.
fn has_valid_load(capacity: Demand, jobs: &[Arc<Job>]) -> bool {
    let initial = jobs
        .iter()
        .filter(|job| job.kind == JobKind::Delivery)
        .fold(0 as Demand, |acc, job| acc.saturating_add(job.demand));

    jobs.iter()
        .try_fold(initial, |load, job| {
            let load = match job.kind {
                JobKind::Delivery => load - job.demand,
                JobKind::Pickup => load.saturating_add(job.demand),
            };
            (load <= capacity).then_some(load)
        })
        .is_some()
        && initial <= capacity
}

/// Returns the earliest time when service can start or `None` if all time windows are missed.
fn get_service_start(job: &Job, arrival: Timestamp) -> Option<Timestamp> {
    if job.time_windows.is_empty() {
        return Some(arrival);
    }

    job.time_windows
        .iter()
        .filter(|tw| arrival <= tw.end)
        .map(|tw| arrival.max(tw.start))
        .min_by(|a, b| compare_floats(*a, *b))
}
