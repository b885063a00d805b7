#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::*;
use crate::models::matrix::CostMatrix;
use crate::models::problem::Vehicle;
use crate::utils::InputError;
use std::sync::Arc;

/// A default factor used by locality smoothing transport costs.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 20.;

/// Provides the way to get routing information for specific locations and vehicle.
///
/// Absent endpoints stand for virtual locations (e.g. the end of an open route): both cost
/// and duration are zero for them. When vehicle is not specified, cost is estimated as a raw
/// distance.
pub trait TransportCost {
    /// Returns transport cost between two locations.
    fn cost(
        &self,
        from: Option<&Location>,
        to: Option<&Location>,
        departure: Timestamp,
        setup_duration: Duration,
        vehicle: Option<&Vehicle>,
    ) -> Result<Cost, InputError>;

    /// Returns transport duration between two locations.
    fn duration(
        &self,
        from: Option<&Location>,
        to: Option<&Location>,
        departure: Timestamp,
        setup_duration: Duration,
        vehicle: Option<&Vehicle>,
    ) -> Result<Duration, InputError>;
}

/// Creates transport costs based on the matrix: plain costs or costs with locality smoothing
/// when smoothing factor is specified.
pub fn create_transport_cost(
    matrix: Arc<CostMatrix>,
    smoothing_factor: Option<f64>,
) -> Arc<dyn TransportCost + Send + Sync> {
    match smoothing_factor {
        Some(factor) => Arc::new(LocalitySmoothingTransportCost::new(matrix, factor)),
        None => Arc::new(MatrixTransportCost::new(matrix)),
    }
}

/// Transport costs read directly from the matrix and scaled by vehicle rates.
pub struct MatrixTransportCost {
    matrix: Arc<CostMatrix>,
}

impl MatrixTransportCost {
    /// Creates a new instance of `MatrixTransportCost`.
    pub fn new(matrix: Arc<CostMatrix>) -> Self {
        Self { matrix }
    }
}

impl TransportCost for MatrixTransportCost {
    fn cost(
        &self,
        from: Option<&Location>,
        to: Option<&Location>,
        _: Timestamp,
        _: Duration,
        vehicle: Option<&Vehicle>,
    ) -> Result<Cost, InputError> {
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => self.matrix.resolve(from, to)?,
            _ => return Ok(0.),
        };

        let distance = self.matrix.distance(from, to);

        Ok(match vehicle {
            Some(vehicle) => {
                vehicle.costs.per_distance * distance + vehicle.costs.per_time * self.matrix.duration(from, to)
            }
            None => distance,
        })
    }

    fn duration(
        &self,
        from: Option<&Location>,
        to: Option<&Location>,
        _: Timestamp,
        _: Duration,
        _: Option<&Vehicle>,
    ) -> Result<Duration, InputError> {
        matrix_duration(self.matrix.as_ref(), from, to)
    }
}

/// Transport costs which add square root terms to distance and time costs. This makes a long leg
/// relatively more expensive than several short ones, so the search prefers geographically
/// clustered routes.
pub struct LocalitySmoothingTransportCost {
    matrix: Arc<CostMatrix>,
    factor: f64,
}

impl LocalitySmoothingTransportCost {
    /// Creates a new instance of `LocalitySmoothingTransportCost`.
    pub fn new(matrix: Arc<CostMatrix>, factor: f64) -> Self {
        Self { matrix, factor }
    }
}

impl TransportCost for LocalitySmoothingTransportCost {
    fn cost(
        &self,
        from: Option<&Location>,
        to: Option<&Location>,
        _: Timestamp,
        setup_duration: Duration,
        vehicle: Option<&Vehicle>,
    ) -> Result<Cost, InputError> {
        let (from_location, to_location) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            _ => return Ok(0.),
        };

        let (from, to) = self.matrix.resolve(from_location, to_location)?;
        let distance = self.matrix.distance(from, to);

        let Some(vehicle) = vehicle else {
            return Ok(distance);
        };

        let costs = &vehicle.costs;
        let setup_cost = if from_location != to_location {
            costs.per_setup_time * setup_duration * costs.setup_time_coefficient
        } else {
            0.
        };

        let distance_cost = costs.per_distance * distance;
        let time_cost = costs.per_time * self.matrix.duration(from, to);

        Ok(distance_cost
            + self.factor * distance_cost.sqrt()
            + time_cost
            + self.factor * time_cost.sqrt()
            + setup_cost)
    }

    fn duration(
        &self,
        from: Option<&Location>,
        to: Option<&Location>,
        _: Timestamp,
        _: Duration,
        _: Option<&Vehicle>,
    ) -> Result<Duration, InputError> {
        matrix_duration(self.matrix.as_ref(), from, to)
    }
}

fn matrix_duration(
    matrix: &CostMatrix,
    from: Option<&Location>,
    to: Option<&Location>,
) -> Result<Duration, InputError> {
    match (from, to) {
        (Some(from), Some(to)) => matrix.resolve(from, to).map(|(from, to)| matrix.duration(from, to)),
        _ => Ok(0.),
    }
}
