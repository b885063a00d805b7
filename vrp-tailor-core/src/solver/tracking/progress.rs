#[cfg(test)]
#[path = "../../../tests/unit/solver/tracking/progress_test.rs"]
mod progress_test;

use super::*;
use crate::models::common::Cost;
use crate::utils::{GenericError, compare_floats};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ProgressRecord {
    iteration: usize,
    best: Cost,
    pool_best: Cost,
    pool_worst: Cost,
    pool_average: Cost,
}

/// Records search progress as csv: one row per iteration with the best cost seen so far
/// and pool statistics. Used to draw convergence charts.
pub struct ProgressRecorder<W: Write> {
    writer: csv::Writer<W>,
    best: Option<Cost>,
}

impl<W: Write> ProgressRecorder<W> {
    /// Creates a new instance of `ProgressRecorder`.
    pub fn new(writer: W) -> Self {
        Self { writer: csv::Writer::from_writer(writer), best: None }
    }

    /// Flushes pending records and returns the underlying writer.
    pub fn into_inner(self) -> GenericResult<W> {
        self.writer.into_inner().map_err(|err| GenericError::from(err.error().to_string()))
    }
}

impl<W: Write> IterationListener for ProgressRecorder<W> {
    fn on_iteration_end(&mut self, ctx: &IterationContext) -> GenericResult<()> {
        let costs = ctx.pool.iter().filter_map(|solution| solution.cost).collect::<Vec<_>>();
        if costs.is_empty() {
            return Ok(());
        }

        let pool_best = costs.iter().copied().min_by(|a, b| compare_floats(*a, *b)).unwrap_or_default();
        let pool_worst = costs.iter().copied().max_by(|a, b| compare_floats(*a, *b)).unwrap_or_default();
        let pool_average = costs.iter().sum::<Cost>() / costs.len() as f64;

        let best = self.best.map_or(pool_best, |best| best.min(pool_best));
        self.best = Some(best);

        self.writer
            .serialize(ProgressRecord { iteration: ctx.iteration, best, pool_best, pool_worst, pool_average })
            .map_err(|err| format!("cannot write progress: '{err}'").into())
    }

    fn on_search_end(&mut self, _: &Problem) -> GenericResult<()> {
        self.writer.flush().map_err(GenericError::from)
    }
}
