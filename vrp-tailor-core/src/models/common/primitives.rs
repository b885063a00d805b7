/// Specifies cost value.
pub type Cost = f64;

/// Specifies distance value.
pub type Distance = f64;

/// Specifies duration value.
pub type Duration = f64;

/// Represents a time point.
pub type Timestamp = f64;

/// Specifies a single dimensional demand or capacity.
pub type Demand = i32;

/// Represents a time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    /// Start of time window.
    pub start: Timestamp,
    /// End of time window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new `TimeWindow`.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: f64::MAX }
    }
}
