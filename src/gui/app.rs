use super::{Config, FpsLimiter};
use crate::{
    parse_rle, Engine, Grid, GrowingEngine, GrowthPolicy, LifeError, Renderer, TextRenderer,
};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use egui_file::FileDialog;
use std::{
    io::Stdout,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{info, warn};

/// Start-up settings of the viewer.
pub struct AppOptions {
    /// Stop after this many generations; `None` runs until paused.
    pub iterations: Option<u64>,
    /// Seconds between two generations while playing.
    pub step_delay: f64,
    pub policy: GrowthPolicy,
    /// Also print every generation to stdout.
    pub echo_text: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            iterations: None,
            step_delay: Config::STEP_DELAY,
            policy: GrowthPolicy::default(),
            echo_text: false,
        }
    }
}

pub struct App {
    pub(super) initial: Grid,                 // Pattern restored by "Reset field".
    pub(super) life_engine: GrowingEngine,    // Conway's GoL engine.
    pub(super) policy: GrowthPolicy,          // Growth policy of the engine.
    pub(super) is_paused: bool,               // Flag indicating whether the simulation is paused.
    pub(super) pause_after_updates: bool, // Flag indicating whether to pause after a certain number of updates.
    pub(super) updates_before_pause: u64, // Number of updates left before stopping.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) step_delay: f64,           // Seconds between generations while playing.
    pub(super) last_step: Instant,        // Moment of the last generation.
    pub(super) last_update_duration: f64, // Duration of the last life update in seconds.
    pub(super) texture: TextureHandle,    // Texture handle of Conway's GoL field.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
    pub(super) open_file_dialog: Option<FileDialog>,
    pub(super) opened_file: Option<PathBuf>,
    pub(super) status: Option<String>, // Last error shown under the controls.
    echo: Option<TextRenderer<Stdout>>,
}

impl App {
    pub fn new(ctx: &Context, grid: Grid, options: AppOptions) -> Self {
        let texture = ctx.load_texture(
            "Conway's GoL field",
            ColorImage::default(),
            TextureOptions::NEAREST,
        );
        let mut app = Self {
            life_engine: GrowingEngine::with_policy(grid.clone(), options.policy),
            initial: grid,
            policy: options.policy,
            is_paused: options.iterations.is_none(),
            pause_after_updates: options.iterations.is_some(),
            updates_before_pause: options.iterations.unwrap_or(0),
            do_one_step: false,
            step_delay: options.step_delay,
            last_step: Instant::now(),
            last_update_duration: 0.,
            texture,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
            open_file_dialog: None,
            opened_file: None,
            status: None,
            echo: options
                .echo_text
                .then(|| TextRenderer::new(std::io::stdout())),
        };
        app.on_new_generation();
        app
    }

    pub fn reset_field(&mut self) {
        self.life_engine = GrowingEngine::with_policy(self.initial.clone(), self.policy);
        self.is_paused = true;
        self.do_one_step = false;
        self.last_update_duration = 0.;
        self.on_new_generation();
    }

    pub(super) fn open_pattern_dialog(&mut self) {
        let mut dialog = FileDialog::open_file(self.opened_file.clone());
        dialog.open();
        self.open_file_dialog = Some(dialog);
    }

    fn load_pattern(&mut self, path: &Path) {
        let loaded = std::fs::read(path)
            .map_err(LifeError::from)
            .and_then(|data| parse_rle(&data));
        match loaded {
            Ok(grid) => {
                info!(path = %path.display(), size = ?grid.size(), "pattern loaded");
                self.initial = grid;
                self.opened_file = Some(path.to_path_buf());
                self.status = None;
                self.reset_field();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load pattern");
                self.status = Some(format!("{}: {}", path.display(), e));
            }
        }
    }

    fn on_new_generation(&mut self) {
        let grid = self.life_engine.current_state();
        let (h, w) = grid.size();
        let mut image = ColorImage::new([w, h], Config::DEAD_COLOR);
        for (y, x) in grid.alive_cells() {
            image.pixels[x + y * w] = Config::ALIVE_COLOR;
        }
        self.texture.set(image, TextureOptions::NEAREST);

        let generation = self.life_engine.generation();
        if let Some(echo) = &mut self.echo {
            if let Err(e) = echo.render(generation, self.life_engine.current_state()) {
                warn!(error = %e, "failed to print the field");
            }
        }
    }

    fn update_engine(&mut self) {
        if self.pause_after_updates && self.updates_before_pause == 0 {
            self.is_paused = true;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step && self.last_step.elapsed().as_secs_f64() < self.step_delay {
            return;
        }

        let timer = Instant::now();
        self.life_engine.advance();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.last_step = Instant::now();

        if self.pause_after_updates {
            self.updates_before_pause = self.updates_before_pause.saturating_sub(1);
        }
        self.do_one_step = false;
        self.on_new_generation();
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }

    fn handle_file_dialog(&mut self, ctx: &Context) {
        let mut selected = None;
        if let Some(dialog) = &mut self.open_file_dialog {
            if dialog.show(ctx).selected() {
                selected = dialog.path().map(|p| p.to_path_buf());
            }
        }
        if let Some(path) = selected {
            self.open_file_dialog = None;
            self.load_pattern(&path);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BUTTON_FILL_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);
                self.draw(ui);
                self.update_engine();
            });

        self.handle_file_dialog(ctx);
        self.fps_limiter.sleep(self.max_fps);
    }
}
