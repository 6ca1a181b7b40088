use super::Renderer;
use crate::{Grid, Result};
use std::{io::Write, thread::sleep, time::Duration};

/// Dumps every generation as a table of `0`/`1` cells.
pub struct TextRenderer<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            delay: Duration::ZERO,
        }
    }

    /// Pause after each frame.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, iteration: u64, grid: &Grid) -> Result<()> {
        writeln!(
            self.out,
            "\n------------------ Iteration {} --------------\n",
            iteration
        )?;
        write!(self.out, "{}", grid)?;
        self.out.flush()?;
        if !self.delay.is_zero() {
            sleep(self.delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        let grid = Grid::from_rows(&[[1u8, 0, 1]]).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(7, &grid).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            text,
            "\n------------------ Iteration 7 --------------\n\n  1  |  0  |  1  |\n"
        );
    }
}
