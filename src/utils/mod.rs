mod growth;
mod parse_rle;
mod traits;

pub use growth::{GrowthPolicy, Padding};
pub use parse_rle::parse_rle;
pub use traits::Engine;
