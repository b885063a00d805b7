//! Contains JSON instance and solution formats.
//!
//! Locations in the instance are matrix indices: location `3` refers to the fourth row and
//! column of distance and duration matrices.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
