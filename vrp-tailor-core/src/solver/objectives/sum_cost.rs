use super::*;

/// An objective which sums costs of all routes.
pub struct SumCost {
    penalty: UnassignedPenalty,
}

impl SumCost {
    /// Creates a new instance of `SumCost`.
    pub fn new(penalty: UnassignedPenalty) -> Self {
        Self { penalty }
    }
}

impl SolutionCost for SumCost {
    fn fitness(&self, solution: &Solution, states: &RouteStates) -> Cost {
        let base_cost = get_route_costs(solution, states).sum::<Cost>();

        self.penalty.apply(base_cost, solution.unassigned.len())
    }
}
