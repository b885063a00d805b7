//! Cost matrix loading.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/matrix_test.rs"]
mod matrix_test;

use std::io::{BufReader, Read};
use vrp_tailor_core::models::matrix::{CostMatrix, CostMatrixBuilder, read_matrix};
use vrp_tailor_core::utils::InputError;

/// Reads cost matrix from optional distance and time tables, at least one is required.
pub fn read_cost_matrix<R: Read>(
    distances: Option<BufReader<R>>,
    durations: Option<BufReader<R>>,
) -> Result<CostMatrix, InputError> {
    let mut builder = CostMatrixBuilder::default();

    if let Some(distances) = distances {
        builder = builder.with_distances(read_matrix(distances)?);
    }

    if let Some(durations) = durations {
        builder = builder.with_durations(read_matrix(durations)?);
    }

    builder.build()
}
