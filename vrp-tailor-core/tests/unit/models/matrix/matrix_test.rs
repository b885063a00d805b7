use super::*;
use std::io::BufReader;

fn create_matrix() -> CostMatrix {
    CostMatrixBuilder::default()
        .with_distances(vec![vec![0., 10.], vec![20., 0.]])
        .with_durations(vec![vec![0., 5.], vec![7., 0.]])
        .build()
        .expect("cannot build matrix")
}

#[test]
fn can_lookup_asymmetric_values() {
    let matrix = create_matrix();

    let (from, to) = matrix.resolve(&Location::from_index(0), &Location::from_index(1)).unwrap();
    assert_eq!((matrix.distance(from, to), matrix.duration(from, to)), (10., 5.));

    let (from, to) = matrix.resolve(&Location::new("1"), &Location::new("0")).unwrap();
    assert_eq!((matrix.distance(from, to), matrix.duration(from, to)), (20., 7.));
}

#[test]
fn can_read_absent_table_as_zeros() {
    let matrix = CostMatrixBuilder::default().with_durations(vec![vec![0., 3.], vec![3., 0.]]).build().unwrap();

    assert_eq!(matrix.distance(0, 1), 0.);
    assert_eq!(matrix.duration(0, 1), 3.);
}

#[test]
fn can_reject_negative_index() {
    let matrix = create_matrix();

    let result = matrix.resolve(&Location::from_index(-1), &Location::from_index(1));

    assert!(matches!(result, Err(InputError::InvalidLocationIndex { .. })));
}

#[test]
fn can_reject_unknown_location() {
    let matrix = create_matrix();

    assert!(matches!(matrix.resolve(&Location::from_index(0), &Location::from_index(2)), Err(InputError::UnknownLocation(_))));
    assert!(matches!(matrix.resolve(&Location::new("depot"), &Location::new("1")), Err(InputError::UnknownLocation(_))));
}

parameterized_test! {can_validate_tables, (distances, durations, is_ok), {
    can_validate_tables_impl(distances, durations, is_ok);
}}

can_validate_tables! {
    case_01_missing: (None, None, false),
    case_02_not_square: (Some(vec![vec![0., 1.], vec![1.]]), None, false),
    case_03_different_rows: (Some(vec![vec![0.]]), Some(vec![vec![0., 1.], vec![1., 0.]]), false),
    case_04_distances_only: (Some(vec![vec![0., 1.], vec![1., 0.]]), None, true),
    case_05_both: (Some(vec![vec![0.]]), Some(vec![vec![0.]]), true),
}

fn can_validate_tables_impl(distances: Option<Vec<Vec<f64>>>, durations: Option<Vec<Vec<f64>>>, is_ok: bool) {
    let mut builder = CostMatrixBuilder::default();
    if let Some(distances) = distances {
        builder = builder.with_distances(distances);
    }
    if let Some(durations) = durations {
        builder = builder.with_durations(durations);
    }

    assert_eq!(builder.build().is_ok(), is_ok);
}

#[test]
fn can_read_matrix_skipping_empty_lines() {
    let data = "0 1.5 2\n\n3  0 4\n5 6 0\n";

    let matrix = read_matrix(BufReader::new(data.as_bytes())).unwrap();

    assert_eq!(matrix, vec![vec![0., 1.5, 2.], vec![3., 0., 4.], vec![5., 6., 0.]]);
}

parameterized_test! {can_reject_malformed_row, (line, value), {
    can_reject_malformed_row_impl(line, value);
}}

can_reject_malformed_row! {
    case_01_text: ("0 abc 1", "abc"),
    case_02_negative: ("0 -1 1", "-1"),
    case_03_nan: ("NaN 1", "NaN"),
}

fn can_reject_malformed_row_impl(line: &str, value: &str) {
    let result = parse_matrix_row(2, line);

    assert_eq!(result, Err(InputError::MalformedMatrixRow { line: 2, value: value.to_string() }));
}

#[test]
fn can_report_unreadable_input() {
    let data: &[u8] = &[b'0', b' ', 0xff, 0xfe, b'\n'];

    let result = read_matrix(BufReader::new(data));

    assert!(matches!(result, Err(InputError::Io(_))));
}
