//! Contains command specific extensions.

pub mod solve;
