use super::{App, Config};
use crate::{Engine, GrowthPolicy};
use eframe::egui::{
    load::SizedTexture, pos2, vec2, Button, DragValue, Image, RichText, Slider, Stroke, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled(self.is_paused, |ui: &mut Ui| {
            ui.horizontal(|ui| {
                ui.checkbox(
                    &mut self.pause_after_updates,
                    Self::new_text("Pause after "),
                );
                ui.add_enabled(self.pause_after_updates, |ui: &mut Ui| {
                    ui.add(DragValue::new(&mut self.updates_before_pause));
                    ui.label(Self::new_text(" iterations"))
                });
            });

            if ui.add(Self::new_button("Next step")).clicked() {
                self.do_one_step = true;
            }
            ui.label(Self::new_text("Space: next step, E: play/pause"))
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Delay: "));
            ui.add(Slider::new(&mut self.step_delay, 0.0..=Config::MAX_STEP_DELAY).suffix(" s"));
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Growth: "));
            let before = self.policy;
            ui.radio_value(
                &mut self.policy,
                GrowthPolicy::Minimal,
                Self::new_text("Minimal"),
            );
            ui.radio_value(
                &mut self.policy,
                GrowthPolicy::Uniform,
                Self::new_text("Uniform"),
            );
            if self.policy != before {
                self.life_engine.set_policy(self.policy);
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reset field")).clicked() {
                self.reset_field();
            }
            if ui.add(Self::new_button("Open RLE...")).clicked() {
                self.open_pattern_dialog();
            }
        });

        if let Some(status) = &self.status {
            ui.label(
                RichText::new(status)
                    .color(Config::ERROR_COLOR)
                    .size(Config::TEXT_SIZE),
            );
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=240.0).logarithmic(true));
        });

        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));

        ui.label(Self::new_text(&self.life_engine.statistics()));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });

            ui.add_space(Config::WIDGET_GAP);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_stats(ui);
                });
            });
        });
    }

    fn draw_gol_field(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new(format!("Iteration #{}", self.life_engine.generation()))
                .color(Config::TEXT_COLOR)
                .size(Config::HEADING_SIZE),
        );

        let (h, w) = self.life_engine.current_state().size();
        let area = ui.available_size();
        let cell_px = (area.x / w as f32).min(area.y / h as f32).max(1.);
        let size = vec2(cell_px * w as f32, cell_px * h as f32);

        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source));

        if cell_px >= Config::GRID_LINE_MIN_CELL_PX {
            let rect = response.rect;
            let stroke = Stroke::new(1., Config::GRID_LINE_COLOR);
            let painter = ui.painter_at(rect);
            for i in 0..=w {
                let x = rect.left() + i as f32 * cell_px;
                painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
            }
            for i in 0..=h {
                let y = rect.top() + i as f32 * cell_px;
                painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical(|ui| {
                self.draw_gol_field(ui);
            });
        });
    }
}
