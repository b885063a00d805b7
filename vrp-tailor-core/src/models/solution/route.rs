use crate::models::common::{Cost, Duration, Location, Timestamp};
use crate::models::problem::{Job, Vehicle};
use std::sync::Arc;

/// Specifies what happens at an activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    /// Vehicle leaves its start location.
    Start,
    /// A job is served.
    Job,
    /// Vehicle driver takes a break at the current location.
    Break,
    /// Vehicle reaches its end location.
    End,
}

/// Represents an activity performed by a vehicle: route start, job service, break or route end.
#[derive(Clone, Debug)]
pub struct Activity {
    /// Activity kind.
    pub kind: ActivityKind,
    /// A job served by activity, none for other kinds.
    pub job: Option<Arc<Job>>,
    /// Activity location, none for a virtual end of open route.
    pub location: Option<Location>,
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
}

/// An ordered sequence of activities performed by one vehicle.
#[derive(Clone, Debug)]
pub struct Route {
    /// A vehicle which performs the route.
    pub vehicle: Arc<Vehicle>,
    /// Route activities including start and end.
    pub activities: Vec<Activity>,
}

impl Route {
    /// Returns jobs in their service order.
    pub fn jobs(&self) -> impl Iterator<Item = &Arc<Job>> + '_ {
        self.activities.iter().filter_map(|activity| activity.job.as_ref())
    }

    /// Returns amount of job activities.
    pub fn job_count(&self) -> usize {
        self.jobs().count()
    }

    /// Returns route start activity.
    pub fn start(&self) -> Option<&Activity> {
        self.activities.first().filter(|activity| activity.kind == ActivityKind::Start)
    }

    /// Returns route end activity.
    pub fn end(&self) -> Option<&Activity> {
        self.activities.last().filter(|activity| activity.kind == ActivityKind::End)
    }
}

/// Aggregated route state computed by the search engine when a route is scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RouteState {
    /// Sum of transport costs of all route legs.
    pub transport_cost: Cost,
    /// Time between route start and end.
    pub duration: Duration,
}

/// A read-only snapshot of route states, one per solution route in the same order.
#[derive(Clone, Debug, Default)]
pub struct RouteStates {
    states: Vec<RouteState>,
}

impl RouteStates {
    /// Creates a new instance of `RouteStates`.
    pub fn new(states: Vec<RouteState>) -> Self {
        Self { states }
    }

    /// Returns amount of route states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if there are no route states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over route states.
    pub fn iter(&self) -> impl Iterator<Item = &RouteState> + '_ {
        self.states.iter()
    }
}
