mod app;
mod config;
mod draw;
mod fps_limit;

pub use app::{App, AppOptions};
pub use config::Config;
use fps_limit::FpsLimiter;
