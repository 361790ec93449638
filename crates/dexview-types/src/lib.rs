pub mod creature;
pub mod snapshot;

pub use creature::*;
pub use snapshot::*;
