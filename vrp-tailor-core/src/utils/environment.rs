use crate::utils::{DefaultRandom, GenericResult, Random, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Parallelism::default(), Arc::new(|msg| println!("{msg}")))
    }
}

/// Specifies data parallelism settings: candidate evaluation and search operators run on
/// the dedicated worker pool.
#[derive(Clone)]
pub struct Parallelism {
    thread_pool: Arc<ThreadPool>,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` with given amount of worker threads.
    pub fn new(threads: usize) -> GenericResult<Self> {
        if threads == 0 {
            return Err("amount of worker threads should be greater than zero".into());
        }

        Ok(Self { thread_pool: Arc::new(ThreadPool::new(threads)?) })
    }

    /// Returns the worker thread pool.
    pub fn thread_pool(&self) -> &ThreadPool {
        self.thread_pool.as_ref()
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self { thread_pool: Arc::new(ThreadPool::single()) }
    }
}
