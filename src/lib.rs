mod driver;
mod engine;
mod error;
mod grid;
mod gui;
mod render;
mod utils;

pub use driver::{prompt_iterations, Driver};
pub use engine::{BoundedEngine, GrowingEngine};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use gui::{App, AppOptions, Config};
pub use render::{Renderer, TextRenderer};
pub use utils::{parse_rle, Engine, GrowthPolicy, Padding};

/// Starting board used when no pattern is given: a horizontal blinker.
pub const DEFAULT_BOARD: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 1], [0, 0, 0]];
