use super::*;
use crate::helpers::models::create_empty_problem;
use crate::helpers::solver::{create_pool, run_termination};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

struct FireAt {
    name: &'static str,
    iteration: usize,
    calls: Rc<RefCell<Vec<usize>>>,
}

impl Termination for FireAt {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_termination(&mut self, ctx: &IterationContext) -> bool {
        self.calls.borrow_mut().push(ctx.iteration);
        ctx.iteration == self.iteration
    }
}

fn create_fire_at(name: &'static str, iteration: usize) -> (Box<dyn Termination>, Rc<RefCell<Vec<usize>>>) {
    let calls = Rc::new(RefCell::new(vec![]));
    (Box::new(FireAt { name, iteration, calls: calls.clone() }), calls)
}

#[test]
fn can_update_all_criteria_when_one_fires() {
    let problem = create_empty_problem();
    let (first, first_calls) = create_fire_at("first", 1);
    let (second, second_calls) = create_fire_at("second", 5);
    let mut termination = CompositeTermination::new(vec![first, second]);

    let result = run_termination(&mut termination, &problem, &[10.]);

    assert_eq!(result, vec![true]);
    assert_eq!(*first_calls.borrow(), vec![1]);
    assert_eq!(*second_calls.borrow(), vec![1]);
    assert_eq!(termination.reason(), Some("first"));
}

#[test]
fn can_keep_stopped_state() {
    let problem = create_empty_problem();
    let (first, _) = create_fire_at("first", 2);
    let mut termination = CompositeTermination::new(vec![first]);

    let result = run_termination(&mut termination, &problem, &[10., 10., 10.]);

    assert_eq!(result, vec![false, true, true]);
    assert_eq!(termination.state(), TerminationState::Stopped);
}

#[test]
fn can_report_all_fired_criteria() {
    let problem = create_empty_problem();
    let (first, _) = create_fire_at("first", 2);
    let (second, _) = create_fire_at("second", 2);
    let mut termination = CompositeTermination::new(vec![first, second]);

    run_termination(&mut termination, &problem, &[10., 10.]);

    assert_eq!(termination.reason(), Some("first, second"));
}

#[test]
fn can_keep_running_without_criteria() {
    let problem = create_empty_problem();
    let mut termination = CompositeTermination::new(vec![]);

    let result = run_termination(&mut termination, &problem, &[10.; 100]);

    assert!(result.iter().all(|is_terminated| !is_terminated));
    assert_eq!(termination.state(), TerminationState::Running);
    assert_eq!(termination.reason(), None);
}

#[test]
fn can_combine_builtin_criteria() {
    let problem = create_empty_problem();
    let mut termination = CompositeTermination::new(vec![
        Box::new(MaxTime::new(60_000)),
        Box::new(MaxIterationsWithoutImprovement::new(3)),
        Box::new(MinVariation::new(10, 0.0001)),
        Box::new(MaxIterations::new(100)),
    ]);

    let result = run_termination(&mut termination, &problem, &[10., 9., 9., 9., 9.]);

    assert_eq!(result, vec![false, false, false, false, true]);
    assert_eq!(termination.reason(), Some("no-improvement"));
}

parameterized_test! {can_detect_max_iterations, (iteration, limit, expected), {
    can_detect_max_iterations_impl(iteration, limit, expected);
}}

can_detect_max_iterations! {
    case_01: (11, 10, true),
    case_02: (9, 10, false),
    case_03: (10, 10, true),
}

fn can_detect_max_iterations_impl(iteration: usize, limit: usize, expected: bool) {
    let problem = create_empty_problem();
    let pool = create_pool(&[10.]);

    let result = MaxIterations::new(limit).is_termination(&IterationContext { iteration, problem: &problem, pool: &pool });

    assert_eq!(result, expected);
}

#[test]
fn can_detect_max_time() {
    let problem = create_empty_problem();
    let pool = create_pool(&[10.]);
    let ctx = IterationContext { iteration: 1, problem: &problem, pool: &pool };

    assert!(!MaxTime::new(60_000).is_termination(&ctx));

    let mut termination = MaxTime::new(0);
    termination.on_search_start();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(termination.is_termination(&ctx));
}

#[test]
fn can_detect_interruption() {
    let problem = create_empty_problem();
    let flag = Arc::new(AtomicBool::new(false));
    let mut termination = Interruption::new(flag.clone());

    assert_eq!(run_termination(&mut termination, &problem, &[10.]), vec![false]);

    flag.store(true, std::sync::atomic::Ordering::Relaxed);
    assert_eq!(run_termination(&mut termination, &problem, &[10.]), vec![true]);
}
