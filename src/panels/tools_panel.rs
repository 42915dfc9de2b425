use crate::WhiteboardApp;
use crate::components::ToolButton;
use crate::tools::Tool;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::Window::new("Toolbar")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 16.0])
        .show(ctx, |ui| {
            if app.gestures.pending_text().is_some() {
                ui.disable();
            }
            ui.horizontal(|ui| {
                let selected_tool = app.store.state().selected_tool();

                for tool in Tool::ALL {
                    if ToolButton::for_tool(tool, tool == selected_tool)
                        .show(ui)
                        .clicked()
                    {
                        app.store.set_selected_tool(tool);
                    }
                    if tool.ends_group() {
                        ui.separator();
                    }
                }

                ui.separator();

                // Undo, redo and download are present but have no action.
                ToolButton::new("⟲", "Undo", false).show(ui);
                ToolButton::new("⟳", "Redo", false).show(ui);

                ui.separator();

                ToolButton::new("⬇", "Download", false).show(ui);
                if ToolButton::new("🗑", "Clear Canvas", false).show(ui).clicked() {
                    app.store.clear_canvas();
                }
            });
        });
}
