use super::*;
use crate::helpers::models::*;

#[test]
fn can_get_best_solution_preferring_first_on_ties() {
    let pool = vec![
        Solution::unassigned_only(vec![]),
        create_evaluated_solution(10.),
        Solution::new(vec![], vec![Arc::new(create_test_job("job1", 1))]).with_cost(5.),
        create_evaluated_solution(5.),
    ];

    let best = get_best_solution(pool.as_slice()).expect("no best solution");

    assert_eq!(best.cost, Some(5.));
    assert_eq!(best.unassigned.len(), 1);
}

#[test]
fn can_skip_not_evaluated_solutions() {
    let pool = vec![Solution::unassigned_only(vec![]), Solution::unassigned_only(vec![])];

    assert!(get_best_solution(pool.as_slice()).is_none());
    assert!(get_best_solution(&[]).is_none());
}

#[test]
fn can_count_assigned_jobs() {
    let vehicle = Arc::new(create_test_vehicle("v1"));
    let activity =
        |kind: ActivityKind, job: Option<Arc<Job>>| Activity { kind, location: None, job, arrival: 0., departure: 0. };
    let route = Route {
        vehicle,
        activities: vec![
            activity(ActivityKind::Start, None),
            activity(ActivityKind::Job, Some(Arc::new(create_test_job("job1", 1)))),
            activity(ActivityKind::Break, None),
            activity(ActivityKind::Job, Some(Arc::new(create_test_job("job2", 1)))),
            activity(ActivityKind::End, None),
        ],
    };

    let solution = Solution::new(vec![route], vec![]);

    assert_eq!(solution.assigned_count(), 2);
    assert_eq!(solution.routes[0].jobs().map(|job| job.id.as_str()).collect::<Vec<_>>(), vec!["job1", "job2"]);
    assert_eq!(solution.routes[0].start().map(|activity| activity.kind), Some(ActivityKind::Start));
    assert_eq!(solution.routes[0].end().map(|activity| activity.kind), Some(ActivityKind::End));
}
