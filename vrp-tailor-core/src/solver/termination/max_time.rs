use super::*;
use crate::utils::Timer;

/// A termination criteria which is in terminated state when the time budget is exceeded.
pub struct MaxTime {
    start: Timer,
    limit_in_millis: u128,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_millis: u64) -> Self {
        Self { start: Timer::start(), limit_in_millis: limit_in_millis as u128 }
    }
}

impl Termination for MaxTime {
    fn name(&self) -> &'static str {
        "max-time"
    }

    fn on_search_start(&mut self) {
        self.start = Timer::start();
    }

    fn is_termination(&mut self, _: &IterationContext) -> bool {
        self.start.elapsed_millis() > self.limit_in_millis
    }
}
