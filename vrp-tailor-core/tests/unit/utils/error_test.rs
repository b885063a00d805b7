use super::*;

#[test]
fn can_create_error_from_strings() {
    assert_eq!(GenericError::from("first"), GenericError::from("first".to_string()));
    assert_eq!(GenericError::from("second").to_string(), "second");
}

#[test]
fn can_convert_input_error() {
    let error = InputError::InvalidLocationIndex { from: "-1[-1]".to_string(), to: "2[2]".to_string() };

    let error = GenericError::from(error);

    assert_eq!(error.to_string(), "index of location '-1[-1]' or '2[2]' is negative");
}

#[test]
fn can_describe_malformed_row() {
    let error = InputError::MalformedMatrixRow { line: 3, value: "abc".to_string() };

    assert!(error.to_string().contains("abc"));
    assert!(error.to_string().contains('3'));
}
