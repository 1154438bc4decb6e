//! Problem domain models.

mod costs;
pub use self::costs::*;

mod fleet;
pub use self::fleet::*;
