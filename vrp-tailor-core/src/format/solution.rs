#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use crate::models::common::{Cost, Timestamp};
use crate::models::problem::Problem;
use crate::models::solution::{Activity, ActivityKind, Solution};
use crate::solver::tracking::SolutionWriter;
use crate::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Specifies a solution.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionDefinition {
    /// Solution cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    /// Solution routes.
    pub routes: Vec<RouteDefinition>,
    /// Ids of unassigned jobs.
    pub unassigned: Vec<String>,
}

/// Specifies a route.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Route activities.
    pub activities: Vec<ActivityDefinition>,
}

/// Specifies activity kind.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKindDefinition {
    /// Route start.
    Start,
    /// Job service.
    Job,
    /// Driver break.
    Break,
    /// Route end.
    End,
}

impl From<ActivityKind> for ActivityKindDefinition {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Start => Self::Start,
            ActivityKind::Job => Self::Job,
            ActivityKind::Break => Self::Break,
            ActivityKind::End => Self::End,
        }
    }
}

/// Specifies an activity.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDefinition {
    /// Activity kind.
    #[serde(rename = "type")]
    pub kind: ActivityKindDefinition,
    /// Job id, omitted for activities other than job service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Location id, omitted for the end of open route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
}

impl From<&Solution> for SolutionDefinition {
    fn from(solution: &Solution) -> Self {
        Self {
            cost: solution.cost,
            routes: solution
                .routes
                .iter()
                .map(|route| RouteDefinition {
                    vehicle_id: route.vehicle.id.clone(),
                    activities: route
                        .activities
                        .iter()
                        .map(|activity| ActivityDefinition {
                            kind: activity.kind.into(),
                            job_id: activity.job.as_ref().map(|job| job.id.clone()),
                            location: activity.location.as_ref().map(|location| location.id().to_string()),
                            arrival: activity.arrival,
                            departure: activity.departure,
                        })
                        .collect(),
                })
                .collect(),
            unassigned: solution.unassigned.iter().map(|job| job.id.clone()).collect(),
        }
    }
}

/// Persists solution as json file. The file is written to a temporary file in the same directory
/// and then renamed, so readers never see a partially written solution.
pub struct JsonSolutionWriter {
    path: PathBuf,
}

impl JsonSolutionWriter {
    /// Creates a new instance of `JsonSolutionWriter`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the target path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl SolutionWriter for JsonSolutionWriter {
    fn write(&self, _: &Problem, solution: &Solution) -> GenericResult<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let file = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(file.as_file());
            serde_json::to_writer_pretty(&mut writer, &SolutionDefinition::from(solution))
                .map_err(|err| format!("cannot write solution: '{err}'"))?;
            writer.flush()?;
        }
        file.as_file().sync_all()?;

        file.persist(&self.path).map(|_| ()).map_err(|err| {
            GenericError::from(format!("cannot persist solution to '{}': '{}'", self.path.display(), err.error))
        })
    }
}

/// Returns a human readable solution summary: amount of served jobs, job sequence of each route
/// and unassigned jobs.
pub fn get_solution_summary(solution: &Solution) -> String {
    let routes = solution
        .routes
        .iter()
        .map(|route| {
            let mut ids = route.jobs().map(|job| job.id.as_str()).collect::<Vec<_>>();
            ids.dedup();

            let (start, end) = (get_location_id(route.start()), get_location_id(route.end()));

            let stops = std::iter::once(start).chain(ids).chain(std::iter::once(end)).filter(|id| !id.is_empty());

            format!("{}: {}", route.vehicle.id, stops.collect::<Vec<_>>().join(" "))
        })
        .collect::<Vec<_>>();

    let unassigned = solution.unassigned.iter().map(|job| job.id.as_str()).collect::<Vec<_>>();

    let mut lines = vec![format!("Nb delivery : {}", solution.assigned_count())];
    lines.extend(routes);
    lines.push(format!("Unassigned : {}", unassigned.join(" ")));

    lines.join("\n")
}

/// Returns a detailed solution report: schedule of every activity in every route.
pub fn get_solution_report(solution: &Solution) -> String {
    let mut lines = vec![format!("Cost : {}", solution.cost.map_or_else(|| "-".to_string(), |cost| cost.to_string()))];

    solution.routes.iter().for_each(|route| {
        lines.push(format!("Route {} :", route.vehicle.id));
        lines.extend(route.activities.iter().map(|activity| {
            let name = match activity.kind {
                ActivityKind::Start => "start",
                ActivityKind::Job => activity.job.as_ref().map_or("job", |job| job.id.as_str()),
                ActivityKind::Break => "break",
                ActivityKind::End => "end",
            };
            let location = get_location_id(Some(activity));
            let location = if location.is_empty() { "-" } else { location };

            format!("  {name} at {location}: arrival {} departure {}", activity.arrival, activity.departure)
        }));
    });

    lines.join("\n")
}

fn get_location_id(activity: Option<&Activity>) -> &str {
    activity.and_then(|activity| activity.location.as_ref()).map_or("", |location| location.id())
}
