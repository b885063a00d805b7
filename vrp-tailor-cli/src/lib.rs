//! A crate contains extensions used by the `vrp-tailor` command line interface: algorithm
//! configuration, cost matrix loading and interruption handling.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub mod extensions;
