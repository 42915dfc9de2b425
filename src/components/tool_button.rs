use eframe::egui;

use crate::tools::Tool;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(36.0, 36.0);
const SELECTED_BG: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);
const HOVER_BG: egui::Color32 = egui::Color32::from_rgb(0xf1, 0xf5, 0xf9);
const ICON_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x29, 0x3b);

/// Square icon button used in the toolbar.
pub struct ToolButton {
    pub icon: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(icon: &'static str, label: &'static str, selected: bool) -> Self {
        Self {
            icon,
            label,
            selected,
        }
    }

    pub fn for_tool(tool: Tool, selected: bool) -> Self {
        Self::new(tool.icon(), tool.name(), selected)
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Some(SELECTED_BG)
            } else if response.hovered() {
                Some(HOVER_BG)
            } else {
                None
            };
            if let Some(bg_color) = bg_color {
                ui.painter().rect_filled(rect, 6.0, bg_color);
            }

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                ICON_COLOR
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(18.0),
                text_color,
            );
        }

        response.on_hover_text(self.label)
    }
}
