//! Run summary printed to stdout after a badge is written.

use std::fmt::Write;
use std::path::PathBuf;

use super::ansi;
use crate::badge::ColorTier;
use crate::coverage::{CoverageFormat, LcovTotals};

/// What a run produced.
#[derive(Debug, Clone)]
pub struct BadgeSummary {
    pub input: PathBuf,
    pub format: CoverageFormat,
    pub output: PathBuf,
    /// Badge text without the `%` sign.
    pub display: String,
    pub tier: ColorTier,
    /// Line counters behind the percentage, for lcov input.
    pub totals: Option<LcovTotals>,
    /// Coverage could not be read and was treated as 0.0.
    pub degraded: bool,
}

pub struct SummaryFormatter {
    use_colors: bool,
    verbose: u8,
}

impl SummaryFormatter {
    #[must_use]
    pub const fn new(use_colors: bool, verbose: u8) -> Self {
        Self {
            use_colors,
            verbose,
        }
    }

    const fn tier_color(tier: ColorTier) -> &'static str {
        match tier {
            ColorTier::BrightGreen | ColorTier::Green => ansi::GREEN,
            ColorTier::YellowGreen | ColorTier::Yellow | ColorTier::Orange => ansi::YELLOW,
            ColorTier::Red => ansi::RED,
        }
    }

    #[must_use]
    pub fn format(&self, summary: &BadgeSummary) -> String {
        let mut output = String::new();

        if self.verbose > 0 {
            let _ = writeln!(
                output,
                "Input: {} ({})",
                summary.input.display(),
                summary.format.as_str()
            );
            if let Some(totals) = summary.totals {
                let _ = writeln!(
                    output,
                    "Lines: {}/{}",
                    totals.lines_hit, totals.lines_found
                );
            }
            let _ = writeln!(output, "Tier: {}", summary.tier);
        }

        let percent = format!("{}%", summary.display);
        let percent = if self.use_colors {
            format!("{}{percent}{}", Self::tier_color(summary.tier), ansi::RESET)
        } else {
            percent
        };

        let _ = write!(
            output,
            "Coverage badge written: {} ({percent})",
            summary.output.display()
        );
        if summary.degraded {
            output.push_str(" [coverage unreadable]");
        }
        output.push('\n');

        output
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
