mod bounded;
mod growing;

pub use bounded::BoundedEngine;
pub use growing::GrowingEngine;
