#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

use crate::models::common::{Demand, Duration, Location, TimeWindow};
use crate::models::problem::{Job, JobKind, Problem, TransportCost, Vehicle, VehicleBreak, VehicleCostParams};
use crate::utils::InputError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Specifies a problem instance.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDefinition {
    /// Available vehicles.
    pub vehicles: Vec<VehicleDefinition>,
    /// Jobs to be served.
    pub jobs: Vec<JobDefinition>,
}

/// Specifies a vehicle.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDefinition {
    /// Vehicle id.
    pub id: String,
    /// Start location index.
    pub start_location: isize,
    /// End location index, route is open when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_location: Option<isize>,
    /// Vehicle capacity, unlimited when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Demand>,
    /// Vehicle skills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Alternative skill sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_skills: Option<Vec<Vec<String>>>,
    /// Vehicle costs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<VehicleCostsDefinition>,
    /// A multiplier of job setup durations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_time_coefficient: Option<f64>,
    /// Vehicle shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftDefinition>,
    /// Driver break.
    #[serde(rename = "break", skip_serializing_if = "Option::is_none")]
    pub vehicle_break: Option<BreakDefinition>,
}

/// Specifies vehicle costs, omitted values fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCostsDefinition {
    /// Fixed cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<f64>,
    /// Cost per distance unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_distance: Option<f64>,
    /// Cost per time unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_time: Option<f64>,
    /// Cost per setup time unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_setup_time: Option<f64>,
}

/// Specifies vehicle shift.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ShiftDefinition {
    /// Shift start.
    pub start: f64,
    /// Shift end.
    pub end: f64,
}

/// Specifies a driver break.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakDefinition {
    /// Time window when break can start as `[start, end]`.
    pub time_window: [f64; 2],
    /// Break duration.
    pub duration: Duration,
}

/// Specifies job kind.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobKindDefinition {
    /// A delivery job.
    #[default]
    Delivery,
    /// A pickup job.
    Pickup,
}

/// Specifies a job.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDefinition {
    /// Job id.
    pub id: String,
    /// Job kind, delivery when omitted.
    #[serde(default)]
    pub kind: JobKindDefinition,
    /// Location index.
    pub location: isize,
    /// Job demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<Demand>,
    /// Service duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    /// Setup duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_duration: Option<Duration>,
    /// Time windows as `[start, end]` pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_windows: Option<Vec<[f64; 2]>>,
    /// Required skills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Reads instance definition from json.
pub fn deserialize_instance<R: Read>(reader: BufReader<R>) -> Result<InstanceDefinition, InputError> {
    serde_json::from_reader(reader)
        .map_err(|err| InputError::InconsistentInstance(format!("cannot deserialize instance: '{err}'")))
}

/// Reads a problem from json using given transport costs.
pub fn read_problem<R: Read>(
    reader: BufReader<R>,
    transport: Arc<dyn TransportCost + Send + Sync>,
) -> Result<Problem, InputError> {
    map_to_problem(deserialize_instance(reader)?, transport)
}

/// Maps instance definition to the problem model, validating its consistency.
pub fn map_to_problem(
    instance: InstanceDefinition,
    transport: Arc<dyn TransportCost + Send + Sync>,
) -> Result<Problem, InputError> {
    let fleet =
        instance.vehicles.into_iter().map(|vehicle| map_vehicle(vehicle).map(Arc::new)).collect::<Result<Vec<_>, _>>()?;
    let jobs = instance.jobs.into_iter().map(|job| map_job(job).map(Arc::new)).collect::<Result<Vec<_>, _>>()?;

    Problem::new(fleet, jobs, transport)
}

fn map_vehicle(vehicle: VehicleDefinition) -> Result<Vehicle, InputError> {
    let defaults = VehicleCostParams::default();
    let costs = vehicle.costs.unwrap_or_default();

    let shift = match vehicle.shift {
        Some(shift) => create_time_window(&vehicle.id, shift.start, shift.end)?,
        None => TimeWindow::max(),
    };

    let vehicle_break = vehicle
        .vehicle_break
        .map(|BreakDefinition { time_window: [start, end], duration }| {
            if duration < 0. {
                return Err(InputError::InconsistentInstance(format!(
                    "negative break duration of vehicle '{}'",
                    vehicle.id
                )));
            }

            Ok(VehicleBreak { time_window: create_time_window(&vehicle.id, start, end)?, duration })
        })
        .transpose()?;

    let capacity = vehicle.capacity.unwrap_or(Demand::MAX);
    if capacity < 0 {
        return Err(InputError::InconsistentInstance(format!("negative capacity of vehicle '{}'", vehicle.id)));
    }

    let skills = vehicle
        .skills
        .into_iter()
        .chain(vehicle.alternative_skills.unwrap_or_default())
        .map(|skills| skills.into_iter().collect::<FxHashSet<_>>())
        .collect();

    Ok(Vehicle {
        start: Location::from_index(vehicle.start_location),
        end: vehicle.end_location.map(Location::from_index),
        capacity,
        skills,
        shift,
        costs: VehicleCostParams {
            fixed: costs.fixed.unwrap_or(defaults.fixed),
            per_distance: costs.per_distance.unwrap_or(defaults.per_distance),
            per_time: costs.per_time.unwrap_or(defaults.per_time),
            per_setup_time: costs.per_setup_time.unwrap_or(defaults.per_setup_time),
            setup_time_coefficient: vehicle.setup_time_coefficient.unwrap_or(defaults.setup_time_coefficient),
        },
        vehicle_break,
        id: vehicle.id,
    })
}

fn map_job(job: JobDefinition) -> Result<Job, InputError> {
    let demand = job.demand.unwrap_or_default();
    if demand < 0 {
        return Err(InputError::InconsistentInstance(format!("negative demand of job '{}'", job.id)));
    }

    let time_windows = job
        .time_windows
        .unwrap_or_default()
        .into_iter()
        .map(|[start, end]| create_time_window(&job.id, start, end))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Job {
        kind: match job.kind {
            JobKindDefinition::Delivery => JobKind::Delivery,
            JobKindDefinition::Pickup => JobKind::Pickup,
        },
        location: Location::from_index(job.location),
        demand,
        duration: job.duration.unwrap_or_default(),
        setup_duration: job.setup_duration.unwrap_or_default(),
        time_windows,
        skills: job.skills.unwrap_or_default().into_iter().collect(),
        id: job.id,
    })
}

fn create_time_window(id: &str, start: f64, end: f64) -> Result<TimeWindow, InputError> {
    if start > end || start < 0. {
        return Err(InputError::InconsistentInstance(format!("invalid time window [{start}, {end}] of '{id}'")));
    }

    Ok(TimeWindow::new(start, end))
}
