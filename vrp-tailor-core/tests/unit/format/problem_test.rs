use super::*;
use crate::helpers::models::create_line_matrix;
use crate::models::problem::create_transport_cost;

const INSTANCE: &str = r#"
{
  "vehicles": [
    {
      "id": "v1",
      "startLocation": 0,
      "endLocation": 0,
      "capacity": 10,
      "skills": ["fridge"],
      "alternativeSkills": [["tail_lift"]],
      "costs": { "fixed": 100, "perDistance": 2 },
      "setupTimeCoefficient": 0.5,
      "shift": { "start": 0, "end": 1000 },
      "break": { "timeWindow": [100, 200], "duration": 30 }
    },
    { "id": "v2", "startLocation": 1 }
  ],
  "jobs": [
    { "id": "job1", "location": 2, "demand": 3, "duration": 10, "setupDuration": 5,
      "timeWindows": [[0, 100], [200, 300]], "skills": ["fridge"] },
    { "id": "job2", "kind": "pickup", "location": 3 }
  ]
}
"#;

fn read(data: &str) -> Result<Problem, InputError> {
    read_problem(BufReader::new(data.as_bytes()), create_transport_cost(create_line_matrix(4), None))
}

#[test]
fn can_read_problem() {
    let problem = read(INSTANCE).expect("cannot read problem");

    assert_eq!(problem.fleet.len(), 2);
    assert_eq!(problem.jobs.len(), 2);

    let v1 = problem.fleet[0].as_ref();
    assert_eq!(v1.capacity, 10);
    assert_eq!(v1.skills.len(), 2);
    assert_eq!(v1.costs, VehicleCostParams { fixed: 100., per_distance: 2., per_time: 0., per_setup_time: 0., setup_time_coefficient: 0.5 });
    assert_eq!(v1.shift, TimeWindow::new(0., 1000.));
    assert_eq!(v1.vehicle_break, Some(VehicleBreak { time_window: TimeWindow::new(100., 200.), duration: 30. }));

    let v2 = problem.fleet[1].as_ref();
    assert_eq!(v2.capacity, Demand::MAX);
    assert!(v2.end.is_none());
    assert!(v2.skills.is_empty());
    assert_eq!(v2.costs, VehicleCostParams::default());
    assert!(v2.vehicle_break.is_none());

    let job1 = problem.jobs[0].as_ref();
    assert_eq!(job1.kind, JobKind::Delivery);
    assert_eq!(job1.location, Location::from_index(2));
    assert_eq!(job1.time_windows, vec![TimeWindow::new(0., 100.), TimeWindow::new(200., 300.)]);
    assert!(v1.can_serve(job1));
    assert!(!v2.can_serve(job1));

    let job2 = problem.jobs[1].as_ref();
    assert_eq!(job2.kind, JobKind::Pickup);
    assert_eq!((job2.demand, job2.duration, job2.setup_duration), (0, 0., 0.));
}

parameterized_test! {can_reject_inconsistent_instance, data, {
    can_reject_inconsistent_instance_impl(data);
}}

can_reject_inconsistent_instance! {
    case_01_not_json: "vehicles",
    case_02_missing_field: r#"{ "vehicles": [] }"#,
    case_03_duplicate_job: r#"{ "vehicles": [], "jobs": [{ "id": "a", "location": 1 }, { "id": "a", "location": 2 }] }"#,
    case_04_inverted_time_window: r#"{ "vehicles": [], "jobs": [{ "id": "a", "location": 1, "timeWindows": [[10, 5]] }] }"#,
    case_05_negative_demand: r#"{ "vehicles": [], "jobs": [{ "id": "a", "location": 1, "demand": -1 }] }"#,
    case_06_negative_capacity: r#"{ "vehicles": [{ "id": "v", "startLocation": 0, "capacity": -1 }], "jobs": [] }"#,
    case_07_negative_break_duration: r#"{ "vehicles": [{ "id": "v", "startLocation": 0,
        "break": { "timeWindow": [0, 10], "duration": -1 } }], "jobs": [] }"#,
    case_08_inverted_break_time_window: r#"{ "vehicles": [{ "id": "v", "startLocation": 0,
        "break": { "timeWindow": [10, 0], "duration": 1 } }], "jobs": [] }"#,
}

fn can_reject_inconsistent_instance_impl(data: &str) {
    let result = read(data);

    assert!(matches!(result, Err(InputError::InconsistentInstance(_))));
}
