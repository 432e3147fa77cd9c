//! Coverage extraction from lcov traces and JSON summaries.
//!
//! Both readers produce a [`Coverage`]: the numeric percentage used to pick a
//! badge color, and the text drawn on the badge.

mod lcov;
mod summary;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::badge::ColorTier;
use crate::error::{CoverageBadgeError, Result};

pub use lcov::{LcovParser, LcovTotals};
pub use summary::{DisplayValue, SummaryParser, SummaryTotals};

/// Default input when neither the CLI nor the config names one.
pub const DEFAULT_LCOV_PATH: &str = "coverage/lcov.info";

/// Trait for coverage report parsers.
pub trait CoverageParser {
    /// Parse report content into a coverage value.
    ///
    /// # Errors
    /// Returns an error if the content is not a valid report of this format.
    fn parse(&self, content: &str) -> Result<Coverage>;
}

/// Input report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageFormat {
    /// Pick by file extension: `.json` is a summary, anything else lcov
    #[default]
    Auto,
    /// lcov trace with `LH:`/`LF:` records
    Lcov,
    /// JSON summary with `totals.percent_covered_display`
    Json,
}

impl CoverageFormat {
    /// Resolve `Auto` against the input path. Explicit formats are returned unchanged.
    #[must_use]
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json { Self::Json } else { Self::Lcov }
            }
            other => other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Lcov => "lcov",
            Self::Json => "json",
        }
    }
}

/// Aggregate coverage of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// Percentage used for tier selection.
    pub percentage: f64,
    /// Text shown on the badge, without the `%` sign.
    pub display: String,
    /// Raw line counters, when the report carries them.
    pub totals: Option<LcovTotals>,
}

impl Coverage {
    /// Coverage whose badge text is the percentage with one decimal place.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        Self {
            percentage,
            display: format!("{percentage:.1}"),
            totals: None,
        }
    }

    /// Coverage computed from lcov line counters.
    #[must_use]
    pub fn from_totals(totals: LcovTotals) -> Self {
        Self {
            totals: Some(totals),
            ..Self::from_percentage(totals.percentage())
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::from_percentage(0.0)
    }

    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.percentage)
    }

    #[must_use]
    pub fn tier(&self) -> ColorTier {
        ColorTier::for_percentage(self.percentage)
    }
}

/// Round to one decimal place, halves away from zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Read and parse a coverage report.
///
/// `format` may be `Auto`; it is resolved against `path` first.
///
/// # Errors
/// Returns `InputNotFound` if the file does not exist, `FileRead` for any other
/// read failure (including non-UTF-8 content), or the parser's error.
pub fn extract(path: &Path, format: CoverageFormat) -> Result<Coverage> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CoverageBadgeError::InputNotFound(path.to_path_buf())
        } else {
            CoverageBadgeError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    match format.resolve(path) {
        CoverageFormat::Json => SummaryParser.parse(&content),
        CoverageFormat::Lcov | CoverageFormat::Auto => LcovParser::new().parse(&content),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
