use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageBadgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Coverage file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid coverage summary: {0}")]
    InvalidSummary(String),

    #[error("Coverage percentage out of range: {0}")]
    OutOfRange(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CoverageBadgeError {
    /// Short category name shown as the prefix of a diagnostic line.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InputNotFound(_) => "InputNotFound",
            Self::InvalidSummary(_) | Self::JsonParse(_) => "Summary",
            Self::OutOfRange(_) => "Coverage",
            Self::Io(_) => "IO",
        }
    }

    /// Underlying cause worth showing on its own line, if the message omits it.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint printed under the error, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InputNotFound(_) => {
                Some("Run your test suite with coverage enabled, or pass the report path")
            }
            Self::OutOfRange(_) => Some("Check that LH never exceeds LF in the lcov trace"),
            Self::TomlParse(_) => Some("Run with --no-config to ignore the configuration file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoverageBadgeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
