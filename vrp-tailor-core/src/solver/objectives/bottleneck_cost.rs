use super::*;

/// A min-max objective: only the most expensive route counts. Used when balancing the worst
/// loaded vehicle matters more than the total cost.
pub struct BottleneckCost {
    penalty: UnassignedPenalty,
}

impl BottleneckCost {
    /// Creates a new instance of `BottleneckCost`.
    pub fn new(penalty: UnassignedPenalty) -> Self {
        Self { penalty }
    }
}

impl SolutionCost for BottleneckCost {
    fn fitness(&self, solution: &Solution, states: &RouteStates) -> Cost {
        let base_cost = get_route_costs(solution, states).fold(0., Cost::max);

        self.penalty.apply(base_cost, solution.unassigned.len())
    }
}
