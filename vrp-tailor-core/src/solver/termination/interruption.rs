use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A termination criteria driven by an external flag, e.g. set from a signal handler.
pub struct Interruption {
    should_interrupt: Arc<AtomicBool>,
}

impl Interruption {
    /// Creates a new instance of `Interruption`.
    pub fn new(should_interrupt: Arc<AtomicBool>) -> Self {
        Self { should_interrupt }
    }
}

impl Termination for Interruption {
    fn name(&self) -> &'static str {
        "interruption"
    }

    fn is_termination(&mut self, _: &IterationContext) -> bool {
        self.should_interrupt.load(Ordering::Relaxed)
    }
}
