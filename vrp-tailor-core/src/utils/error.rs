#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<InputError> for GenericError {
    fn from(value: InputError) -> Self {
        Self(value.to_string())
    }
}

/// Describes problems with input data: matrices, locations and instance definitions.
/// Such errors are never replaced by default values as it would corrupt solution ranking.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A location with negative matrix index has reached transport costs.
    #[error("index of location '{from}' or '{to}' is negative")]
    InvalidLocationIndex {
        /// An origin location id.
        from: String,
        /// A destination location id.
        to: String,
    },

    /// A matrix row contains a value which is not a non-negative number.
    #[error("malformed matrix row {line}: cannot use '{value}' as a value")]
    MalformedMatrixRow {
        /// A zero based row number.
        line: usize,
        /// An offending value.
        value: String,
    },

    /// A matrix table has a shape which cannot be used for lookup.
    #[error("inconsistent matrix: {0}")]
    InconsistentMatrix(String),

    /// Neither distance nor duration table is specified.
    #[error("at least one of distance or time matrices should be specified")]
    MissingMatrix,

    /// A location cannot be mapped to the matrix.
    #[error("unknown location: '{0}'")]
    UnknownLocation(String),

    /// Input cannot be read.
    #[error("cannot read input: {0}")]
    Io(String),

    /// An instance definition is not consistent.
    #[error("inconsistent instance: {0}")]
    InconsistentInstance(String),
}
