use super::*;
use crate::helpers::models::*;
use crate::helpers::solver::create_test_environment;
use crate::models::problem::Vehicle;
use crate::utils::{DefaultRandom, Parallelism};
use std::sync::Arc;

fn create_problem(capacity: i32) -> Problem {
    let fleet = vec![
        Vehicle { capacity, ..create_test_vehicle("v1") },
        Vehicle { capacity, ..create_test_vehicle("v2") },
    ];
    let jobs = (1..6).map(|idx| create_test_job(&format!("job{idx}"), idx)).collect();

    create_test_problem(create_line_matrix(6), fleet, jobs)
}

fn get_job_ids(solution: &Solution) -> Vec<String> {
    let mut ids = solution
        .routes
        .iter()
        .flat_map(|route| route.jobs().map(|job| job.id.clone()))
        .chain(solution.unassigned.iter().map(|job| job.id.clone()))
        .collect::<Vec<_>>();
    ids.sort();

    ids
}

#[test]
fn can_create_initial_solution_with_all_jobs() {
    let problem = create_problem(10);

    let candidate = RuinRecreateSearch::default().create_initial(&problem, &create_test_environment()).unwrap();

    assert_eq!(candidate.solution.assigned_count(), 5);
    assert!(candidate.solution.unassigned.is_empty());
    assert_eq!(candidate.states.len(), candidate.solution.routes.len());
}

#[test]
fn can_leave_jobs_unassigned_when_capacity_exceeded() {
    let problem = create_problem(2);

    let candidate = RuinRecreateSearch::default().create_initial(&problem, &create_test_environment()).unwrap();

    assert_eq!(candidate.solution.assigned_count(), 4);
    assert_eq!(candidate.solution.unassigned.len(), 1);
}

parameterized_test! {can_explore_keeping_all_jobs, threads, {
    can_explore_keeping_all_jobs_impl(threads);
}}

can_explore_keeping_all_jobs! {
    case_01_single_thread: 1,
    case_02_many_threads: 3,
}

fn can_explore_keeping_all_jobs_impl(threads: usize) {
    let problem = create_problem(3);
    let environment = Environment::new(
        Arc::new(DefaultRandom::new_repeatable(42)),
        Parallelism::new(threads).unwrap(),
        Arc::new(|_| {}),
    );
    let search = RuinRecreateSearch::new(5, (0.2, 0.5));
    let initial = search.create_initial(&problem, &environment).unwrap();

    let candidates = search.explore(&problem, &initial.solution, &environment).unwrap();

    assert_eq!(candidates.len(), 5);
    candidates.iter().for_each(|candidate| {
        assert_eq!(get_job_ids(&candidate.solution), get_job_ids(&initial.solution));
        assert_eq!(candidate.states.len(), candidate.solution.routes.len());
        assert!(candidate.solution.routes.iter().all(|route| route.job_count() > 0));
    });
}
