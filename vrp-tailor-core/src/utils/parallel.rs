#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use crate::utils::GenericResult;
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper. A pool with one thread runs everything on the caller thread.
pub struct ThreadPool {
    inner: Option<RayonThreadPool>,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        if num_threads <= 1 {
            return Ok(Self::single());
        }

        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map(|inner| Self { inner: Some(inner) })
            .map_err(|err| format!("cannot build a thread pool: '{err}'").into())
    }

    /// Creates a pool which executes everything on the caller thread.
    pub fn single() -> Self {
        Self { inner: None }
    }

    /// Maps collection and collects results into vector, in parallel when the pool has many threads.
    pub fn map_collect<T, F, R>(&self, source: Vec<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(T) -> R + Sync + Send,
        R: Send,
    {
        match &self.inner {
            Some(inner) => inner.install(|| source.into_par_iter().map(map_op).collect()),
            None => source.into_iter().map(map_op).collect(),
        }
    }
}
