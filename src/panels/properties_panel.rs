use egui::color_picker::{Alpha, color_edit_button_srgba};
use egui::{Color32, RichText, Slider};

use crate::WhiteboardApp;
use crate::color::Color;

pub fn properties_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    let [min_width, max_width] = app.config.stroke_width_range;
    let opacity_step = f64::from(app.config.opacity_step) * 100.0;

    egui::Window::new("Properties")
        .resizable(false)
        .collapsible(false)
        .default_width(256.0)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .show(ctx, |ui| {
            if app.gestures.pending_text().is_some() {
                ui.disable();
            }
            let state = app.store.state();
            let stroke_color = state.stroke_color();
            let fill_color = state.fill_color();
            let mut stroke_width = state.stroke_width();
            let mut opacity_percent = state.opacity() * 100.0;

            ui.label(RichText::new("Stroke Color").small());
            ui.horizontal(|ui| {
                let mut color = stroke_color.to_color32().unwrap_or(Color32::BLACK);
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.store.set_stroke_color(Color::from(color));
                }
                ui.label(RichText::new(stroke_color.to_string()).small().weak());
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Fill Color").small());
            ui.horizontal(|ui| {
                // Transparent shows as white in the picker.
                let mut color = fill_color.to_color32().unwrap_or(Color32::WHITE);
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.store.set_fill_color(Color::from(color));
                }
                if ui.small_button("None").clicked() {
                    app.store.set_fill_color(Color::Transparent);
                }
            });
            ui.add_space(8.0);

            ui.label(RichText::new(format!("Stroke Width: {stroke_width}px")).small());
            let width_slider = Slider::new(&mut stroke_width, min_width..=max_width)
                .step_by(1.0)
                .show_value(false);
            if ui.add(width_slider).changed() {
                app.store.set_stroke_width(stroke_width);
            }
            ui.add_space(8.0);

            ui.label(RichText::new(format!("Opacity: {}%", opacity_percent.round())).small());
            let opacity_slider = Slider::new(&mut opacity_percent, 0.0..=100.0)
                .step_by(opacity_step)
                .show_value(false);
            if ui.add(opacity_slider).changed() {
                app.store.set_opacity(opacity_percent / 100.0);
            }
        });
}
