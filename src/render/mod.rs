mod text;

pub use text::TextRenderer;

use crate::{Grid, Result};

/// Receives the field after every generation for display.
pub trait Renderer {
    /// Presents `grid` as the state after `iteration` steps.
    fn render(&mut self, iteration: u64, grid: &Grid) -> Result<()>;
}
