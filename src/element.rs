use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::id_generator::{ElementId, generate_id};
use crate::tools::Tool;

/// A coordinate in canvas pixel space.
pub type Point = Pos2;

/// Visual properties stamped onto every element at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(0x1e, 0x29, 0x3b),
            fill_color: Color::Transparent,
            stroke_width: 2.0,
            opacity: 1.0,
        }
    }
}

/// One committed shape, path or text record on the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: Tool,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl Element {
    /// Start a drag-built element of `kind` at `anchor` with zero size.
    ///
    /// Pen elements additionally start a path holding just the anchor.
    pub fn shape(kind: Tool, anchor: Point, style: Style) -> Self {
        Self {
            id: generate_id(),
            kind,
            x: anchor.x,
            y: anchor.y,
            width: Some(0.0),
            height: Some(0.0),
            points: (kind == Tool::Pen).then(|| vec![anchor]),
            text: None,
            stroke_color: style.stroke_color,
            fill_color: style.fill_color,
            stroke_width: style.stroke_width,
            opacity: style.opacity,
        }
    }

    /// A text element anchored at `anchor`.
    pub fn text(anchor: Point, text: impl Into<String>, style: Style) -> Self {
        Self {
            id: generate_id(),
            kind: Tool::Text,
            x: anchor.x,
            y: anchor.y,
            width: None,
            height: None,
            points: None,
            text: Some(text.into()),
            stroke_color: style.stroke_color,
            fill_color: style.fill_color,
            stroke_width: style.stroke_width,
            opacity: style.opacity,
        }
    }

    pub fn anchor(&self) -> Point {
        Pos2::new(self.x, self.y)
    }

    /// The signed size delta, if this element carries one.
    pub fn size(&self) -> Option<Vec2> {
        Some(Vec2::new(self.width?, self.height?))
    }

    /// Anchor plus the signed size: where the gesture ended.
    pub fn end_point(&self) -> Option<Point> {
        self.size().map(|size| self.anchor() + size)
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_deref().unwrap_or_default()
    }

    /// Shallow merge: every field set in `patch` replaces ours, the rest stay.
    pub fn apply(&mut self, patch: &ElementPatch) {
        let ElementPatch {
            kind,
            x,
            y,
            width,
            height,
            points,
            text,
            stroke_color,
            fill_color,
            stroke_width,
            opacity,
        } = patch;

        if let Some(kind) = kind {
            self.kind = *kind;
        }
        if let Some(x) = x {
            self.x = *x;
        }
        if let Some(y) = y {
            self.y = *y;
        }
        if width.is_some() {
            self.width = *width;
        }
        if height.is_some() {
            self.height = *height;
        }
        if points.is_some() {
            self.points.clone_from(points);
        }
        if text.is_some() {
            self.text.clone_from(text);
        }
        if let Some(color) = stroke_color {
            self.stroke_color = *color;
        }
        if let Some(color) = fill_color {
            self.fill_color = *color;
        }
        if let Some(width) = stroke_width {
            self.stroke_width = *width;
        }
        if let Some(opacity) = opacity {
            self.opacity = *opacity;
        }
    }
}

/// Partial element fields for [`crate::store::WhiteboardStore::update_element`].
///
/// The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(rename = "type")]
    pub kind: Option<Tool>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub points: Option<Vec<Point>>,
    pub text: Option<String>,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub opacity: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_starts_degenerate() {
        let rect = Element::shape(Tool::Rectangle, Pos2::new(3.0, 4.0), Style::default());
        assert_eq!(rect.size(), Some(Vec2::ZERO));
        assert_eq!(rect.end_point(), Some(Pos2::new(3.0, 4.0)));
        assert!(rect.points.is_none());
    }

    #[test]
    fn test_pen_starts_with_anchor_point() {
        let pen = Element::shape(Tool::Pen, Pos2::new(1.0, 2.0), Style::default());
        assert_eq!(pen.points(), &[Pos2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_text_has_no_size() {
        let text = Element::text(Pos2::new(50.0, 50.0), "Hello", Style::default());
        assert_eq!(text.kind, Tool::Text);
        assert_eq!(text.text.as_deref(), Some("Hello"));
        assert!(text.size().is_none());
        assert!(text.end_point().is_none());
    }

    #[test]
    fn test_apply_patch_only_touches_set_fields() {
        let mut element = Element::shape(Tool::Line, Pos2::new(0.0, 0.0), Style::default());
        let before = element.clone();
        element.apply(&ElementPatch {
            stroke_width: Some(5.0),
            ..Default::default()
        });
        assert_eq!(element.stroke_width, 5.0);
        assert_eq!(
            Element {
                stroke_width: before.stroke_width,
                ..element.clone()
            },
            before
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let element = Element::text(Pos2::new(1.0, 2.0), "hi", Style::default());
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["strokeColor"], "#1e293b");
        assert_eq!(json["fillColor"], "transparent");
        assert_eq!(json["strokeWidth"], 2.0);
        assert!(json.get("width").is_none());
    }
}
