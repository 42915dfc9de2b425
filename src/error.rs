use thiserror::Error;

/// A color string that is neither `transparent` nor a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: expected \"transparent\" or #rgb, #rrggbb, #rrggbbaa")]
pub struct ColorParseError {
    pub input: String,
}

/// Errors that can occur while loading the whiteboard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
