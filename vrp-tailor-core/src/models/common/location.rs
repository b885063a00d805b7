use std::fmt;

/// Represents a place known by the cost matrix. Location is immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    id: String,
    index: Option<isize>,
}

impl Location {
    /// Creates a location which is resolved in the matrix by its id.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), index: None }
    }

    /// Creates a location from matrix index which is also used as its id.
    pub fn from_index(index: isize) -> Self {
        Self { id: index.to_string(), index: Some(index) }
    }

    /// Returns location id.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns matrix index if it was specified.
    pub fn index(&self) -> Option<isize> {
        self.index
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.id, index),
            None => write!(f, "{}", self.id),
        }
    }
}
