use super::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vrp_tailor_core::format::{ActivityKindDefinition, SolutionDefinition};

const MATRIX: &str = "0 1 2 3\n1 0 1 2\n2 1 0 1\n3 2 1 0\n";

const INSTANCE: &str = r#"
{
  "vehicles": [
    { "id": "v1", "startLocation": 0, "endLocation": 0, "capacity": 2, "costs": { "fixed": 10 } },
    { "id": "v2", "startLocation": 0, "endLocation": 0, "capacity": 2, "costs": { "fixed": 10 } }
  ],
  "jobs": [
    { "id": "job1", "location": 1, "demand": 1 },
    { "id": "job2", "location": 2, "demand": 1, "timeWindows": [[0, 100]] },
    { "id": "job3", "location": 3, "demand": 1 }
  ]
}
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("matrix.txt"), MATRIX).unwrap();
        std::fs::write(dir.path().join("instance.json"), INSTANCE).unwrap();

        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }
}

fn get_matches(args: &[&str]) -> ArgMatches {
    get_solve_app().try_get_matches_from([&["solve"][..], args].concat()).unwrap()
}

fn read_solution(path: impl AsRef<Path>) -> SolutionDefinition {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn can_solve_problem_with_distance_matrix() {
    let fixture = Fixture::new();
    let (matrix, instance, solution, graph) =
        (fixture.path("matrix.txt"), fixture.path("instance.json"), fixture.path("solution.json"), fixture.path("graph.csv"));

    let matches = get_matches(&[
        "--distance-matrix", &matrix,
        "--instance", &instance,
        "--solution", &solution,
        "--no-improvement-iterations", "5",
        "--seed", "1",
        "--debug-graph", &graph,
        "--debug",
    ]);

    run_solve(&matches).expect("cannot solve");

    let solution = read_solution(PathBuf::from(solution));
    assert!(solution.unassigned.is_empty());
    assert_eq!(solution.routes.iter().map(|route| route.activities.len() - 2).sum::<usize>(), 3);
    assert!(solution.cost.is_some());

    let graph = std::fs::read_to_string(graph).unwrap();
    assert!(graph.starts_with("iteration,best,pool_best,pool_worst,pool_average"));
}

#[test]
fn can_solve_problem_with_time_matrix_and_all_options() {
    let fixture = Fixture::new();
    let (matrix, instance, solution) =
        (fixture.path("matrix.txt"), fixture.path("instance.json"), fixture.path("solution.json"));

    let matches = get_matches(&[
        "--time-matrix", &matrix,
        "--instance", &instance,
        "--solution", &solution,
        "--minmax",
        "--nearby",
        "--max-time", "10000",
        "--stable-iterations", "5",
        "--stable-coef", "0.01",
        "--threads", "2",
    ]);

    run_solve(&matches).expect("cannot solve");

    assert!(read_solution(solution).unassigned.is_empty());
}

#[test]
fn can_use_explicit_algorithm_config() {
    let fixture = Fixture::new();
    let config = fixture.path("algorithm.json");
    std::fs::write(&config, r#"{ "search": { "maxIterations": 3, "poolSize": 2, "seed": 7 } }"#).unwrap();

    let matches = get_matches(&[
        "--distance-matrix", &fixture.path("matrix.txt"),
        "--instance", &fixture.path("instance.json"),
        "--solution", &fixture.path("solution.json"),
        "--algorithm", &config,
    ]);

    run_solve(&matches).expect("cannot solve");

    assert!(Path::new(&fixture.path("solution.json")).exists());
}

#[test]
fn can_schedule_vehicle_break() {
    let fixture = Fixture::new();
    let instance = fixture.path("break.json");
    std::fs::write(
        &instance,
        r#"{
          "vehicles": [{ "id": "v1", "startLocation": 0, "endLocation": 0, "capacity": 3,
                         "break": { "timeWindow": [0, 1], "duration": 5 } }],
          "jobs": [{ "id": "job1", "location": 1 }, { "id": "job2", "location": 2 }, { "id": "job3", "location": 3 }]
        }"#,
    )
    .unwrap();

    let matches = get_matches(&[
        "--time-matrix", &fixture.path("matrix.txt"),
        "--instance", &instance,
        "--solution", &fixture.path("solution.json"),
        "--no-improvement-iterations", "3",
        "--seed", "3",
    ]);

    run_solve(&matches).expect("cannot solve");

    let solution = read_solution(fixture.path("solution.json"));
    assert!(solution.unassigned.is_empty());
    assert_eq!(solution.routes.len(), 1);
    let breaks = solution.routes[0].activities.iter().filter(|activity| activity.kind == ActivityKindDefinition::Break);
    assert_eq!(breaks.count(), 1);
}

#[test]
fn can_require_matrix() {
    let result = get_solve_app().try_get_matches_from(["solve", "--instance", "instance.json"]);

    assert!(result.is_err());
}

#[test]
fn can_require_instance() {
    let result = get_solve_app().try_get_matches_from(["solve", "--time-matrix", "matrix.txt"]);

    assert!(result.is_err());
}

#[test]
fn can_require_both_stability_options() {
    for arg in ["--stable-iterations", "--stable-coef"] {
        let args = ["solve", "--time-matrix", "matrix.txt", "--instance", "instance.json", arg, "5"];

        assert!(get_solve_app().try_get_matches_from(args).is_err());
    }
}

#[test]
fn can_report_missing_explicit_config() {
    let fixture = Fixture::new();

    let matches = get_matches(&[
        "--distance-matrix", &fixture.path("matrix.txt"),
        "--instance", &fixture.path("instance.json"),
        "--algorithm", &fixture.path("missing.json"),
    ]);

    let result = run_solve(&matches);

    assert!(result.is_err_and(|err| err.contains("algorithm config")));
}

#[test]
fn can_report_invalid_numeric_option() {
    let fixture = Fixture::new();

    let matches = get_matches(&[
        "--distance-matrix", &fixture.path("matrix.txt"),
        "--instance", &fixture.path("instance.json"),
        "--max-time", "abc",
    ]);

    assert!(run_solve(&matches).is_err_and(|err| err.contains("max time")));
}

#[test]
fn can_report_malformed_matrix_before_search() {
    let fixture = Fixture::new();
    let matrix = fixture.path("malformed.txt");
    std::fs::write(&matrix, "0 1\n1 -\n").unwrap();
    let solution = fixture.path("solution.json");

    let matches = get_matches(&[
        "--distance-matrix", &matrix,
        "--instance", &fixture.path("instance.json"),
        "--solution", &solution,
    ]);

    assert!(run_solve(&matches).is_err_and(|err| err.contains("cost matrix")));
    assert!(!Path::new(&solution).exists());
}
