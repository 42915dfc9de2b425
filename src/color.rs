use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// Paint color of an element: a concrete color or the "do not paint" sentinel.
///
/// Serialized as `"transparent"` or a lowercase hex string such as `"#1e293b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Transparent,
    Solid(Color32),
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Solid(Color32::from_rgb(r, g, b))
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// The egui color to paint with, `None` for the transparent sentinel.
    pub fn to_color32(self) -> Option<Color32> {
        match self {
            Self::Transparent => None,
            Self::Solid(color) => Some(color),
        }
    }
}

impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        Self::Solid(color)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }
        Color32::from_hex(trimmed)
            .map(Self::Solid)
            .map_err(|_| ColorParseError {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Solid(color) => {
                let [r, g, b, a] = color.to_srgba_unmultiplied();
                if a == u8::MAX {
                    write!(f, "#{r:02x}{g:02x}{b:02x}")
                } else {
                    write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
                }
            }
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transparent() {
        assert_eq!("transparent".parse::<Color>(), Ok(Color::Transparent));
        assert_eq!(" Transparent ".parse::<Color>(), Ok(Color::Transparent));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#1e293b".parse::<Color>(), Ok(Color::rgb(0x1e, 0x29, 0x3b)));
        assert_eq!("#fff".parse::<Color>(), Ok(Color::WHITE));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "red-ish".parse::<Color>().unwrap_err();
        assert_eq!(err.input, "red-ish");
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x00, 0x10).to_string(), "#ab0010");
        assert_eq!(Color::Transparent.to_string(), "transparent");
    }

    #[test]
    fn test_serde_uses_strings() {
        let json = serde_json::to_string(&Color::BLACK).unwrap();
        assert_eq!(json, "\"#000000\"");
        let back: Color = serde_json::from_str("\"transparent\"").unwrap();
        assert!(back.is_transparent());
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
