use egui::{Pos2, Rect, Stroke, Vec2};
use log::debug;

use crate::config::WhiteboardConfig;
use crate::element::Element;
use crate::surface::DrawSurface;
use crate::tools::Tool;

/// Full-redraw rasterizer for the element list.
///
/// Holds only configuration and the last known surface size; painting never
/// depends on what was painted before.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    arrowhead_length: f32,
    arrowhead_angle: f32,
    text_size: f32,
    viewport: Vec2,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&WhiteboardConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &WhiteboardConfig) -> Self {
        Self {
            arrowhead_length: config.arrowhead_length,
            arrowhead_angle: config.arrowhead_angle_degrees.to_radians(),
            text_size: config.text_size,
            viewport: Vec2::ZERO,
        }
    }

    /// Record the current surface size.
    ///
    /// Returns true when the size changed, in which case the caller must repaint.
    pub fn resize(&mut self, size: Vec2) -> bool {
        if size == self.viewport {
            return false;
        }
        debug!("Canvas resized from {:?} to {:?}", self.viewport, size);
        self.viewport = size;
        true
    }

    /// Clear `surface` and paint `elements` in order, then `provisional` on top.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        elements: &[Element],
        provisional: Option<&Element>,
    ) {
        surface.clear();
        for element in elements.iter().chain(provisional) {
            self.draw_element(surface, element);
        }
    }

    /// Paint a single element. Alpha is back at 1 afterwards.
    pub fn draw_element(&self, surface: &mut dyn DrawSurface, element: &Element) {
        surface.set_alpha(element.opacity);
        let stroke_color = element.stroke_color.to_color32();
        let fill = element.fill_color.to_color32();
        let stroke = stroke_color.map(|color| Stroke::new(element.stroke_width, color));

        match element.kind {
            Tool::Rectangle => {
                if let Some(size) = non_degenerate(element) {
                    let rect = Rect::from_two_pos(element.anchor(), element.anchor() + size);
                    if let Some(fill) = fill {
                        surface.fill_rect(rect, fill);
                    }
                    if let Some(stroke) = stroke {
                        surface.stroke_rect(rect, stroke);
                    }
                }
            }
            Tool::Circle => {
                if let Some(size) = non_degenerate(element) {
                    let center = element.anchor() + size / 2.0;
                    let radius = size.abs() / 2.0;
                    if let Some(fill) = fill {
                        surface.fill_ellipse(center, radius, fill);
                    }
                    if let Some(stroke) = stroke {
                        surface.stroke_ellipse(center, radius, stroke);
                    }
                }
            }
            Tool::Line | Tool::Arrow => {
                if let (Some(end), Some(stroke)) = (element.end_point(), stroke) {
                    let start = element.anchor();
                    surface.stroke_polyline(&[start, end], stroke);
                    if element.kind == Tool::Arrow {
                        for barb in self.arrowhead(start, end) {
                            surface.stroke_polyline(&[end, barb], stroke);
                        }
                    }
                }
            }
            Tool::Pen => {
                let points = element.points();
                if let Some(stroke) = stroke {
                    if points.len() > 1 {
                        surface.stroke_polyline(points, stroke);
                    }
                }
            }
            Tool::Text => {
                if let (Some(text), Some(color)) = (element.text.as_deref(), stroke_color) {
                    if !text.is_empty() {
                        surface.fill_text(element.anchor(), text, self.text_size, color);
                    }
                }
            }
            Tool::Select | Tool::Eraser => {}
        }

        surface.set_alpha(1.0);
    }

    /// End points of the two arrowhead strokes for a shaft from `from` to `to`.
    ///
    /// A zero-length shaft has angle `atan2(0, 0) == 0`, so the head points left.
    pub fn arrowhead(&self, from: Pos2, to: Pos2) -> [Pos2; 2] {
        let delta = to - from;
        let angle = delta.y.atan2(delta.x);
        let barb = |theta: f32| {
            Pos2::new(
                to.x - self.arrowhead_length * theta.cos(),
                to.y - self.arrowhead_length * theta.sin(),
            )
        };
        [barb(angle - self.arrowhead_angle), barb(angle + self.arrowhead_angle)]
    }
}

/// Signed size of a box-shaped element, or `None` when it would collapse to nothing.
fn non_degenerate(element: &Element) -> Option<Vec2> {
    element.size().filter(|size| size.x != 0.0 && size.y != 0.0)
}
