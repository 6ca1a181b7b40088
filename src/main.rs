#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use conway_grow::{
    parse_rle, prompt_iterations, App, AppOptions, Driver, Grid, GrowingEngine, GrowthPolicy,
    TextRenderer, DEFAULT_BOARD,
};
use std::{path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life on a grid that grows when life reaches its border.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Start from a pattern in RLE format.
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pattern: Option<PathBuf>,

    /// Start from a random soup of the given size, e.g. `20x30` (rows x columns).
    #[arg(long, value_name = "HxW", value_parser = parse_size)]
    random: Option<(usize, usize)>,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Probability of a cell being alive for `--random`.
    #[arg(long, default_value_t = 0.3)]
    fill_rate: f64,

    /// Number of iterations; asked interactively when omitted in console mode.
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// How the grid grows when life is born beyond its edges.
    #[arg(long, default_value = "minimal")]
    growth: GrowthPolicy,

    /// Delay between two generations in milliseconds.
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Show the field in a window instead of the console.
    #[arg(long)]
    gui: bool,
}

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (h, w) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected <rows>x<columns>, got `{s}`"))?;
    let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| e.to_string());
    Ok((parse(h)?, parse(w)?))
}

fn initial_grid(cli: &Cli) -> Result<Grid> {
    if let Some(path) = &cli.pattern {
        let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        return parse_rle(&data).with_context(|| format!("parsing {}", path.display()));
    }
    if let Some((height, width)) = cli.random {
        return Ok(Grid::random(height, width, cli.seed, cli.fill_rate)?);
    }
    Ok(Grid::from_rows(&DEFAULT_BOARD)?)
}

fn run_console(cli: &Cli, grid: Grid) -> Result<()> {
    println!("\n\n************** Welcome to the Game of Life! ************** \n");

    let iterations = match cli.iterations {
        Some(n) => n,
        None => prompt_iterations(std::io::stdin().lock(), std::io::stdout())?,
    };
    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(0));
    let renderer = TextRenderer::new(std::io::stdout()).with_delay(delay);
    let mut driver = Driver::new(GrowingEngine::with_policy(grid, cli.growth), renderer);
    driver.run(iterations)?;
    Ok(())
}

fn run_gui(cli: &Cli, grid: Grid) -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    let mut app_options = AppOptions {
        iterations: cli.iterations,
        policy: cli.growth,
        echo_text: true,
        ..Default::default()
    };
    if let Some(ms) = cli.delay_ms {
        app_options.step_delay = ms as f64 / 1e3;
    }
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, grid, app_options)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let grid = initial_grid(&cli)?;
    let (height, width) = grid.size();
    info!(height, width, population = grid.population(), growth = ?cli.growth, "initial grid");

    if cli.gui {
        run_gui(&cli, grid)
    } else {
        run_console(&cli, grid)
    }
}
