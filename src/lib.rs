//! This crate provides domain models and a pluggable policy to evaluate the cost and the
//! duration of activities performed on tours of a ***Vehicle Routing Problem*** solution.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod utils;
