//! lcov trace reader.
//!
//! Only the per-file line summaries matter here: `LH:<hit>` and `LF:<found>`.
//! Every other record (`SF`, `DA`, `FN`, `BRDA`, `end_of_record`, ...) is skipped.

use regex::Regex;

use super::{Coverage, CoverageParser, round_one_decimal};
use crate::error::Result;

/// Line counters summed over every source file in a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LcovTotals {
    pub lines_hit: u64,
    pub lines_found: u64,
}

impl LcovTotals {
    /// `100 * hit / found` rounded to one decimal, or 0.0 when nothing was found.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.lines_found == 0 {
            return 0.0;
        }
        round_one_decimal(100.0 * self.lines_hit as f64 / self.lines_found as f64)
    }
}

/// Parser for lcov `.info` traces.
pub struct LcovParser {
    record_pattern: Regex,
}

impl Default for LcovParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LcovParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            record_pattern: Regex::new(r"^(LH|LF):\s*(\d+)$").expect("Invalid regex"),
        }
    }

    /// Sum the `LH`/`LF` records of a trace.
    #[must_use]
    pub fn totals(&self, content: &str) -> LcovTotals {
        let mut totals = LcovTotals::default();

        for line in content.lines() {
            let Some(caps) = self.record_pattern.captures(line.trim()) else {
                continue;
            };
            // Values too large for u64 are treated like any other malformed record.
            let Ok(value) = caps[2].parse::<u64>() else {
                continue;
            };
            match &caps[1] {
                "LH" => totals.lines_hit = totals.lines_hit.saturating_add(value),
                _ => totals.lines_found = totals.lines_found.saturating_add(value),
            }
        }

        totals
    }
}

impl CoverageParser for LcovParser {
    fn parse(&self, content: &str) -> Result<Coverage> {
        Ok(Coverage::from_totals(self.totals(content)))
    }
}

#[cfg(test)]
#[path = "lcov_tests.rs"]
mod tests;
