//! A collection of various utilities.

mod comparison;
pub use self::comparison::*;
