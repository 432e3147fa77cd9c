//! JSON coverage summary reader (`coverage json` output).

use serde::Deserialize;

use super::{Coverage, CoverageParser};
use crate::error::{CoverageBadgeError, Result};

#[derive(Debug, Deserialize)]
struct SummaryDocument {
    totals: SummaryTotals,
}

/// The `totals` object of a summary. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryTotals {
    pub percent_covered_display: DisplayValue,
    #[serde(default)]
    pub percent_covered: Option<f64>,
}

/// `percent_covered_display` is usually a string but some tools emit a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl DisplayValue {
    fn text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Badge text: the value as written, minus any `%` suffix the renderer adds back.
    fn badge_text(&self) -> String {
        match self {
            Self::Text(s) => s.trim().trim_end_matches('%').trim_end().to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl SummaryTotals {
    /// Numeric percentage for tier selection: the display value when it
    /// parses as a number, otherwise `percent_covered`.
    fn percentage(&self) -> Option<f64> {
        let from_display = match &self.percent_covered_display {
            DisplayValue::Text(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
            DisplayValue::Number(n) => n.as_f64(),
        };
        from_display
            .filter(|p| p.is_finite())
            .or(self.percent_covered)
    }
}

/// Parser for JSON coverage summaries.
#[derive(Debug, Default, Clone, Copy)]
pub struct SummaryParser;

impl CoverageParser for SummaryParser {
    fn parse(&self, content: &str) -> Result<Coverage> {
        let document: SummaryDocument = serde_json::from_str(content)?;
        let totals = document.totals;

        let percentage = totals.percentage().ok_or_else(|| {
            CoverageBadgeError::InvalidSummary(format!(
                "percent_covered_display is not numeric: {}",
                totals.percent_covered_display.text()
            ))
        })?;

        Ok(Coverage {
            percentage,
            display: totals.percent_covered_display.badge_text(),
            totals: None,
        })
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
