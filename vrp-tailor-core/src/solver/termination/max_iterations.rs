use super::*;

/// A termination criteria which is in terminated state when maximum amount of iterations is reached.
pub struct MaxIterations {
    limit: usize,
}

impl MaxIterations {
    /// Creates a new instance of `MaxIterations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxIterations {
    fn name(&self) -> &'static str {
        "max-iterations"
    }

    fn is_termination(&mut self, ctx: &IterationContext) -> bool {
        ctx.iteration >= self.limit
    }
}
