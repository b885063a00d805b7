use crate::models::common::{Demand, Duration, Location, TimeWindow};
use rustc_hash::FxHashSet;

/// Specifies job kind which defines how demand affects vehicle load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    /// Goods are loaded at route start and dropped at job location.
    Delivery,
    /// Goods are picked up at job location and carried till route end.
    Pickup,
}

/// Represents a job: a delivery or pickup task at a specific location.
#[derive(Clone, Debug)]
pub struct Job {
    /// A job id.
    pub id: String,
    /// Job kind.
    pub kind: JobKind,
    /// Job location.
    pub location: Location,
    /// Amount of goods.
    pub demand: Demand,
    /// Service duration.
    pub duration: Duration,
    /// Setup duration which is spent only when vehicle comes from another location.
    pub setup_duration: Duration,
    /// Time windows when service can start, empty means any time.
    pub time_windows: Vec<TimeWindow>,
    /// Skills required to serve the job.
    pub skills: FxHashSet<String>,
}
