//! Contains an asymmetric distance/duration lookup table keyed by location.

#[cfg(test)]
#[path = "../../../tests/unit/models/matrix/matrix_test.rs"]
mod matrix_test;

mod reader;
pub use self::reader::*;

use crate::models::common::{Distance, Duration, Location};
use crate::utils::InputError;

/// A dense lookup table for distances and durations between matrix indices. The matrix is not
/// required to be symmetric. One of the tables can be absent: its values are read as zeros.
pub struct CostMatrix {
    size: usize,
    distances: Option<Vec<Distance>>,
    durations: Option<Vec<Duration>>,
}

impl CostMatrix {
    /// Returns amount of locations known by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Resolves origin and destination locations into matrix indices.
    pub fn resolve(&self, from: &Location, to: &Location) -> Result<(usize, usize), InputError> {
        if from.index().is_some_and(|index| index < 0) || to.index().is_some_and(|index| index < 0) {
            return Err(InputError::InvalidLocationIndex { from: from.to_string(), to: to.to_string() });
        }

        Ok((self.resolve_one(from)?, self.resolve_one(to)?))
    }

    /// Returns distance between matrix indices.
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.distances.as_ref().map_or(0., |distances| distances[from * self.size + to])
    }

    /// Returns duration between matrix indices.
    pub fn duration(&self, from: usize, to: usize) -> Duration {
        self.durations.as_ref().map_or(0., |durations| durations[from * self.size + to])
    }

    fn resolve_one(&self, location: &Location) -> Result<usize, InputError> {
        let index = match location.index() {
            Some(index) => usize::try_from(index).ok(),
            None => location.id().parse::<usize>().ok(),
        };

        index.filter(|&index| index < self.size).ok_or_else(|| InputError::UnknownLocation(location.to_string()))
    }
}

/// Builds a cost matrix from independent distance and duration tables.
#[derive(Default)]
pub struct CostMatrixBuilder {
    distances: Option<Vec<Vec<Distance>>>,
    durations: Option<Vec<Vec<Duration>>>,
}

impl CostMatrixBuilder {
    /// Sets distance table: rows are origins, columns are destinations.
    pub fn with_distances(mut self, distances: Vec<Vec<Distance>>) -> Self {
        self.distances = Some(distances);
        self
    }

    /// Sets duration table: rows are origins, columns are destinations.
    pub fn with_durations(mut self, durations: Vec<Vec<Duration>>) -> Self {
        self.durations = Some(durations);
        self
    }

    /// Builds a cost matrix.
    pub fn build(self) -> Result<CostMatrix, InputError> {
        let size = match (&self.distances, &self.durations) {
            (None, None) => return Err(InputError::MissingMatrix),
            (Some(distances), Some(durations)) if distances.len() != durations.len() => {
                return Err(InputError::InconsistentMatrix(format!(
                    "distance table has {} rows, time table has {} rows",
                    distances.len(),
                    durations.len()
                )));
            }
            (Some(table), _) | (None, Some(table)) => table.len(),
        };

        Ok(CostMatrix {
            size,
            distances: self.distances.map(|table| flatten_square(table, "distance")).transpose()?,
            durations: self.durations.map(|table| flatten_square(table, "time")).transpose()?,
        })
    }
}

fn flatten_square(table: Vec<Vec<f64>>, name: &str) -> Result<Vec<f64>, InputError> {
    let size = table.len();

    if let Some((row_idx, row)) = table.iter().enumerate().find(|(_, row)| row.len() != size) {
        return Err(InputError::InconsistentMatrix(format!(
            "{name} table row {row_idx} has {} values, expected {size}",
            row.len()
        )));
    }

    Ok(table.into_iter().flatten().collect())
}
