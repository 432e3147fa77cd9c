use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::badge::{DEFAULT_BADGE_PATH, DEFAULT_LABEL};
use crate::coverage::{CoverageFormat, DEFAULT_LCOV_PATH};

/// Top-level configuration (`.coverage-badge.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub badge: BadgeConfig,
}

/// Where to read coverage from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Coverage report path (default: `coverage/lcov.info`).
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// Report format (default: auto, by file extension).
    #[serde(default)]
    pub format: CoverageFormat,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            format: CoverageFormat::default(),
        }
    }
}

/// What to render and where.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BadgeConfig {
    /// Left segment text (default: "coverage").
    #[serde(default = "default_label")]
    pub label: String,

    /// Output SVG path (default: `coverage_badge.svg`).
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            output: default_output_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_LCOV_PATH)
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_BADGE_PATH)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
