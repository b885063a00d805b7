//! A collection of models to represent problem and solution in Vehicle Routing Problem domain.

pub mod common;
pub mod matrix;
pub mod problem;
pub mod solution;
