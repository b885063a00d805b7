//! Problem domain models.

#[cfg(test)]
#[path = "../../../tests/unit/models/problem/problem_test.rs"]
mod problem_test;

mod costs;
pub use self::costs::*;

mod fleet;
pub use self::fleet::*;

mod jobs;
pub use self::jobs::*;

use crate::utils::InputError;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Defines a problem: vehicles, jobs and the way transport is priced.
pub struct Problem {
    /// Available vehicles, each one can perform at most one route.
    pub fleet: Vec<Arc<Vehicle>>,
    /// Jobs to be assigned.
    pub jobs: Vec<Arc<Job>>,
    /// Transport costs used to price route legs.
    pub transport: Arc<dyn TransportCost + Send + Sync>,
}

impl Problem {
    /// Creates a new instance of `Problem` validating ids uniqueness.
    pub fn new(
        fleet: Vec<Arc<Vehicle>>,
        jobs: Vec<Arc<Job>>,
        transport: Arc<dyn TransportCost + Send + Sync>,
    ) -> Result<Self, InputError> {
        if let Some(id) = find_duplicate(fleet.iter().map(|vehicle| vehicle.id.as_str())) {
            return Err(InputError::InconsistentInstance(format!("duplicate vehicle id: '{id}'")));
        }

        if let Some(id) = find_duplicate(jobs.iter().map(|job| job.id.as_str())) {
            return Err(InputError::InconsistentInstance(format!("duplicate job id: '{id}'")));
        }

        Ok(Self { fleet, jobs, transport })
    }
}

fn find_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = FxHashSet::default();
    ids.find(|id| !seen.insert(*id))
}
