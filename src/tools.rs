use serde::{Deserialize, Serialize};

/// The active drawing mode, which also tags the kind of element it produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
    Arrow,
    Text,
    Pen,
    Eraser,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
        Tool::Arrow,
        Tool::Text,
        Tool::Pen,
        Tool::Eraser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Line => "Line",
            Self::Arrow => "Arrow",
            Self::Text => "Text",
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Select => "↖",
            Self::Rectangle => "◻",
            Self::Circle => "○",
            Self::Line => "—",
            Self::Arrow => "➡",
            Self::Text => "T",
            Self::Pen => "✏",
            Self::Eraser => "⌫",
        }
    }

    /// Whether pressing on the canvas with this tool starts a gesture at all.
    pub fn creates_elements(&self) -> bool {
        !matches!(self, Self::Select | Self::Eraser)
    }

    /// Whether the toolbar puts a separator after this tool.
    pub fn ends_group(&self) -> bool {
        matches!(self, Self::Select | Self::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(Tool::default(), Tool::Select);
    }

    #[test]
    fn test_select_and_eraser_do_not_create() {
        let creating: Vec<Tool> = Tool::ALL
            .iter()
            .copied()
            .filter(Tool::creates_elements)
            .collect();
        assert_eq!(
            creating,
            vec![Tool::Rectangle, Tool::Circle, Tool::Line, Tool::Arrow, Tool::Text, Tool::Pen]
        );
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Tool::Pen).unwrap(), "\"pen\"");
        assert_eq!(serde_json::from_str::<Tool>("\"circle\"").unwrap(), Tool::Circle);
    }
}
