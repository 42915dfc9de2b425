use crate::WhiteboardApp;
use crate::surface::{DrawSurface, PainterSurface};

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            let background = app
                .config
                .background
                .to_color32()
                .unwrap_or(egui::Color32::WHITE);
            let mut surface = PainterSurface::new(&painter, canvas_rect, background);

            if app.renderer.resize(surface.size()) {
                ctx.request_repaint();
            }
            app.input.set_canvas_rect(canvas_rect);

            // Floating panels cover the canvas; the pointer over them is outside it.
            let canvas_under_pointer = response.contains_pointer();
            for event in app.input.process_input(ctx, canvas_under_pointer) {
                if app.gestures.handle_event(&event, &mut app.store) {
                    ctx.request_repaint();
                }
            }

            response.on_hover_cursor(egui::CursorIcon::Crosshair);

            app.renderer
                .render(&mut surface, app.store.elements(), app.gestures.provisional());
        });
}
