use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 340.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const HEADING_SIZE: f32 = 24.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;

    pub const WIDGET_GAP: f32 = 20.;

    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
    /// Grid lines are hidden when cells get smaller than this.
    pub const GRID_LINE_MIN_CELL_PX: f32 = 6.;

    pub const MAX_FPS: f64 = 60.;
    /// Seconds between two generations while playing.
    pub const STEP_DELAY: f64 = 2.;
    pub const MAX_STEP_DELAY: f64 = 5.;
}
