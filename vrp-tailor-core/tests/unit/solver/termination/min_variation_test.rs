use super::*;
use crate::helpers::models::create_empty_problem;
use crate::helpers::solver::run_termination;

parameterized_test! {can_detect_termination, (sample, threshold, best_costs, expected), {
    can_detect_termination_impl(sample, threshold, best_costs, expected);
}}

can_detect_termination! {
    case_01_converged: (3, 0.01, vec![100., 50., 50., 50.], vec![false, false, false, true]),
    case_02_not_enough_values: (3, 0.01, vec![50., 50.], vec![false, false]),
    case_03_small_improvements: (3, 0.01, vec![100., 99.99, 99.98], vec![false, false, true]),
    case_04_large_improvements: (3, 0.01, vec![100., 80., 60., 40.], vec![false, false, false, false]),
    case_05_threshold_is_strict: (2, 0., vec![10., 10., 10.], vec![false, false, false]),
    case_06_empty_window_as_single: (0, 0.01, vec![100., 90.], vec![true, true]),
}

fn can_detect_termination_impl(sample: usize, threshold: f64, best_costs: Vec<f64>, expected: Vec<bool>) {
    let problem = create_empty_problem();
    let mut termination = MinVariation::new(sample, threshold);

    let result = run_termination(&mut termination, &problem, best_costs.as_slice());

    assert_eq!(result, expected);
}

#[test]
fn can_use_best_known_cost_when_pool_gets_worse() {
    let problem = create_empty_problem();
    let mut termination = MinVariation::new(3, 0.01);

    let result = run_termination(&mut termination, &problem, &[50., 50., 500.]);

    assert_eq!(result, vec![false, false, true]);
}
