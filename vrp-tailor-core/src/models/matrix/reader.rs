use crate::utils::InputError;
use std::io::{BufRead, BufReader, Read};

/// Reads a whitespace delimited numeric table: one row per line, row index is an origin,
/// column index is a destination. Empty lines are skipped.
pub fn read_matrix<R: Read>(reader: BufReader<R>) -> Result<Vec<Vec<f64>>, InputError> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(line_idx, line)| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(parse_matrix_row(line_idx, line.as_str())),
            Err(err) => Some(Err(InputError::Io(err.to_string()))),
        })
        .collect()
}

/// Parses a single matrix row. Values must be non-negative numbers.
pub fn parse_matrix_row(line_idx: usize, line: &str) -> Result<Vec<f64>, InputError> {
    line.split_whitespace()
        .map(|value| {
            value
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite() && *parsed >= 0.)
                .ok_or_else(|| InputError::MalformedMatrixRow { line: line_idx, value: value.to_string() })
        })
        .collect()
}
