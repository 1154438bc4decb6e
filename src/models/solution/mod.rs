//! Solution domain models.

mod route;
pub use self::route::{Activity, Place};
