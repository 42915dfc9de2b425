use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::element::Style;
use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an optional JSON config file (native builds only).
pub const CONFIG_ENV_VAR: &str = "WHITEBOARD_CONFIG";

/// Startup settings for the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// Pending style of a fresh session
    pub default_style: Style,
    /// Canvas background
    pub background: Color,
    /// Length of each arrowhead stroke, in pixels
    pub arrowhead_length: f32,
    /// Angle between each arrowhead stroke and the shaft
    pub arrowhead_angle_degrees: f32,
    /// Font size for text elements
    pub text_size: f32,
    /// Range offered by the stroke width slider
    pub stroke_width_range: [f32; 2],
    /// Step of the opacity slider, as a fraction
    pub opacity_step: f32,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            default_style: Style::default(),
            background: Color::rgb(0xfa, 0xfa, 0xfa),
            arrowhead_length: 15.0,
            arrowhead_angle_degrees: 30.0,
            text_size: 16.0,
            stroke_width_range: [1.0, 20.0],
            opacity_step: 0.05,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl WhiteboardConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    ///
    /// Problems with the file are logged, never fatal.
    pub fn from_env_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring config {}: {}; using defaults",
                    Path::new(&path).display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let style = &self.default_style;
        if !(style.stroke_width > 0.0) {
            return Err(invalid("default_style.strokeWidth", "must be positive"));
        }
        if !(0.0..=1.0).contains(&style.opacity) {
            return Err(invalid("default_style.opacity", "must be within 0..=1"));
        }
        if self.background.is_transparent() {
            return Err(invalid("background", "must be a concrete color"));
        }
        if !(self.arrowhead_length > 0.0) {
            return Err(invalid("arrowhead_length", "must be positive"));
        }
        if !(self.text_size > 0.0) {
            return Err(invalid("text_size", "must be positive"));
        }
        let [min, max] = self.stroke_width_range;
        if !(min > 0.0 && min <= max) {
            return Err(invalid(
                "stroke_width_range",
                format!("expected 0 < min <= max, got [{min}, {max}]"),
            ));
        }
        if !(self.opacity_step > 0.0 && self.opacity_step <= 1.0) {
            return Err(invalid("opacity_step", "must be within (0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(WhiteboardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WhiteboardConfig::from_json(r##"{"text_size": 24, "background": "#ffffff"}"##)
            .unwrap();
        assert_eq!(config.text_size, 24.0);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.arrowhead_length, 15.0);
        assert_eq!(config.default_style, Style::default());
    }

    #[test]
    fn test_style_fields_are_camel_case() {
        let config = WhiteboardConfig::from_json(
            r##"{"default_style": {"strokeColor": "#000000", "strokeWidth": 4}}"##,
        )
        .unwrap();
        assert_eq!(config.default_style.stroke_color, Color::BLACK);
        assert_eq!(config.default_style.stroke_width, 4.0);
        assert_eq!(config.default_style.fill_color, Color::Transparent);
    }

    #[test]
    fn test_rejects_inverted_width_range() {
        let err = WhiteboardConfig::from_json(r#"{"stroke_width_range": [10, 2]}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "stroke_width_range",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_transparent_background() {
        let err = WhiteboardConfig::from_json(r#"{"background": "transparent"}"#).unwrap_err();
        assert!(err.to_string().contains("background"));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = WhiteboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = WhiteboardConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
