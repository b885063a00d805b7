use crate::models::common::{Demand, Duration, Location, TimeWindow};
use crate::models::problem::Job;
use rustc_hash::FxHashSet;

/// Represents operating costs for a vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleCostParams {
    /// A fixed cost to use a vehicle.
    pub fixed: f64,
    /// Cost per distance unit.
    pub per_distance: f64,
    /// Cost per driving time unit.
    pub per_time: f64,
    /// Cost per setup time unit.
    pub per_setup_time: f64,
    /// A multiplier applied to job setup durations for this vehicle.
    pub setup_time_coefficient: f64,
}

impl Default for VehicleCostParams {
    fn default() -> Self {
        Self { fixed: 0., per_distance: 1., per_time: 0., per_setup_time: 0., setup_time_coefficient: 1. }
    }
}

/// A driver break: taken at the current location for the given duration, starting within
/// the time window. The break is required only when the route lasts longer than its time window.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleBreak {
    /// Time window when break can start.
    pub time_window: TimeWindow,
    /// Break duration.
    pub duration: Duration,
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: String,
    /// Location where vehicle starts.
    pub start: Location,
    /// Location where vehicle ends. Open routes have no end.
    pub end: Option<Location>,
    /// Max load which can be carried at once.
    pub capacity: Demand,
    /// Alternative skill sets: a job is served when one of the sets contains all job skills.
    pub skills: Vec<FxHashSet<String>>,
    /// Time when vehicle can operate.
    pub shift: TimeWindow,
    /// Operating costs.
    pub costs: VehicleCostParams,
    /// An optional driver break.
    pub vehicle_break: Option<VehicleBreak>,
}

impl Vehicle {
    /// Checks whether vehicle has skills required by the job.
    pub fn can_serve(&self, job: &Job) -> bool {
        job.skills.is_empty() || self.skills.iter().any(|skills| job.skills.is_subset(skills))
    }
}
