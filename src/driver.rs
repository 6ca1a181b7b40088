use crate::{Engine, LifeError, Renderer, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const PROMPT: &str = "Please enter the number of iterations you would like to run: ";

/// Asks for the number of iterations until a positive integer is entered.
pub fn prompt_iterations<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<u64> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(LifeError::NoInput);
        }
        match line.trim().parse::<u64>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => writeln!(output, "`{}` is not a positive integer", line.trim())?,
        }
    }
}

/// Runs an engine for a number of iterations, rendering every generation.
pub struct Driver<E: Engine, R: Renderer> {
    engine: E,
    renderer: R,
}

impl<E: Engine, R: Renderer> Driver<E, R> {
    pub fn new(engine: E, renderer: R) -> Self {
        Self { engine, renderer }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_parts(self) -> (E, R) {
        (self.engine, self.renderer)
    }

    /// Renders the current state, then advances and renders `iterations` times.
    pub fn run(&mut self, iterations: u64) -> Result<()> {
        info!(iterations, "starting simulation");
        let start = self.engine.generation();
        self.renderer.render(0, self.engine.current_state())?;
        for i in 1..=iterations {
            self.engine.advance();
            debug!(
                iteration = i,
                generation = self.engine.generation() - start,
                population = self.engine.population(),
                "advanced"
            );
            self.renderer.render(i, self.engine.current_state())?;
        }
        info!(
            population = self.engine.population(),
            "simulation finished"
        );
        Ok(())
    }
}
