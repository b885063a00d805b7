//! Common models.

mod location;
pub use self::location::Location;

mod primitives;
pub use self::primitives::*;
