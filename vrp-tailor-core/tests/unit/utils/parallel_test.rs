use super::*;

parameterized_test! {can_map_collect_preserving_order, threads, {
    can_map_collect_preserving_order_impl(threads);
}}

can_map_collect_preserving_order! {
    case_01_single: 1,
    case_02_many: 4,
}

fn can_map_collect_preserving_order_impl(threads: usize) {
    let pool = ThreadPool::new(threads).expect("cannot create pool");

    let result = pool.map_collect((0..100).collect(), |value: usize| value * 2);

    assert_eq!(result, (0..100).map(|value| value * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_caller_thread_when_single() {
    let caller = std::thread::current().id();

    let executors = ThreadPool::single().map_collect(vec![0, 1], |_: i32| std::thread::current().id());

    assert_eq!(executors, vec![caller, caller]);
}
