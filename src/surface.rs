//! Drawing targets for the [`crate::renderer::Renderer`].
//!
//! A surface mirrors a 2D canvas context: it holds a global alpha that scales every
//! color painted until it is reset, and it takes coordinates relative to its own
//! top-left corner.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, epaint};

/// A 2D drawing target.
pub trait DrawSurface {
    /// Size of the drawable area in points.
    fn size(&self) -> Vec2;

    /// Erase everything painted so far.
    fn clear(&mut self);

    /// Scale factor for all following colors, `0.0..=1.0`.
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color32);

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, stroke: Stroke);

    /// Connected segments through `points`, in order.
    fn stroke_polyline(&mut self, points: &[Pos2], stroke: Stroke);

    /// Single line of text whose baseline starts at `pos`.
    fn fill_text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32);
}

fn faded(color: Color32, alpha: f32) -> Color32 {
    if alpha >= 1.0 {
        color
    } else {
        color.gamma_multiply(alpha)
    }
}

fn faded_stroke(stroke: Stroke, alpha: f32) -> Stroke {
    Stroke::new(stroke.width, faded(stroke.color, alpha))
}

/// Paints onto an egui [`Painter`] inside the canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    alpha: f32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
            alpha: 1.0,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.rect.min.to_vec2()
    }

    fn rect_to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.rect.min.to_vec2())
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        // Shapes from earlier frames are never retained by egui, so clearing
        // only needs to paint the background.
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_filled(self.rect_to_screen(rect), 0.0, faded(color, self.alpha));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.painter.rect_stroke(
            self.rect_to_screen(rect),
            0.0,
            faded_stroke(stroke, self.alpha),
        );
    }

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color32) {
        self.painter.add(Shape::Ellipse(epaint::EllipseShape::filled(
            self.to_screen(center),
            radius,
            faded(color, self.alpha),
        )));
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, stroke: Stroke) {
        self.painter.add(Shape::Ellipse(epaint::EllipseShape::stroke(
            self.to_screen(center),
            radius,
            faded_stroke(stroke, self.alpha),
        )));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], stroke: Stroke) {
        let points: Vec<Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter
            .add(Shape::line(points, faded_stroke(stroke, self.alpha)));
    }

    fn fill_text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(font_size),
            faded(color, self.alpha),
        );
    }
}

/// A primitive recorded by [`RecordingSurface`], with alpha already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color32 },
    StrokeRect { rect: Rect, stroke: Stroke },
    FillEllipse { center: Pos2, radius: Vec2, color: Color32 },
    StrokeEllipse { center: Pos2, radius: Vec2, stroke: Stroke },
    Polyline { points: Vec<Pos2>, stroke: Stroke },
    Text { pos: Pos2, text: String, font_size: f32, color: Color32 },
}

/// Off-screen surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    size: Vec2,
    alpha: f32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            alpha: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: faded(color, self.alpha),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            stroke: faded_stroke(stroke, self.alpha),
        });
    }

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2, color: Color32) {
        self.ops.push(DrawOp::FillEllipse {
            center,
            radius,
            color: faded(color, self.alpha),
        });
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2, stroke: Stroke) {
        self.ops.push(DrawOp::StrokeEllipse {
            center,
            radius,
            stroke: faded_stroke(stroke, self.alpha),
        });
    }

    fn stroke_polyline(&mut self, points: &[Pos2], stroke: Stroke) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            stroke: faded_stroke(stroke, self.alpha),
        });
    }

    fn fill_text(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_owned(),
            font_size,
            color: faded(color, self.alpha),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_applies_alpha() {
        let mut surface = RecordingSurface::new(Vec2::splat(100.0));
        surface.set_alpha(0.5);
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0)), Color32::RED);
        surface.set_alpha(1.0);
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0)), Color32::RED);

        let colors: Vec<Color32> = surface
            .ops()
            .iter()
            .map(|op| match op {
                DrawOp::FillRect { color, .. } => *color,
                other => panic!("unexpected op {other:?}"),
            })
            .collect();
        assert_eq!(colors[0], Color32::RED.gamma_multiply(0.5));
        assert_eq!(colors[1], Color32::RED);
    }

    #[test]
    fn test_clear_drops_ops() {
        let mut surface = RecordingSurface::new(Vec2::splat(10.0));
        surface.stroke_polyline(&[Pos2::ZERO, Pos2::new(1.0, 1.0)], Stroke::new(1.0, Color32::BLACK));
        surface.clear();
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_painter_surface_offsets_into_canvas() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::new(40.0, 30.0), Vec2::new(200.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let surface = PainterSurface::new(&painter, rect, Color32::WHITE);
        assert_eq!(surface.size(), Vec2::new(200.0, 100.0));
        assert_eq!(surface.to_screen(Pos2::new(1.0, 2.0)), Pos2::new(41.0, 32.0));
    }
}
