use rand::prelude::*;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Returns a new generator seeded from this one. Used to hand out independent
    /// generators to worker threads while keeping the run repeatable.
    fn get_rng(&self) -> SmallRng;
}

/// A default random implementation.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` with repeatable (predictable) random generation.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&self) -> SmallRng {
        self.with_rng(|rng| SmallRng::seed_from_u64(rng.next_u64()))
    }
}
