//! Diagnostics on stderr.
//!
//! Format: `✖ Type: message` or `⚠ Warning: message`, each optionally followed
//! by `  × detail` and `  help: suggestion` lines.

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};
use crate::error::CoverageBadgeError;

/// Stderr diagnostics printer.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Printer that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    /// Prints a crate error using its category and suggestion.
    pub fn print_coverage_error(&self, err: &CoverageBadgeError) {
        let detail = err.detail();
        self.print_error(
            err.error_type(),
            &err.to_string(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let head = format!("✖ {error_type}:");
        self.write_diagnostic(w, ansi::RED, &head, message, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_diagnostic(w, ansi::YELLOW, "⚠ Warning:", message, detail, suggestion);
    }

    // Write failures on stderr are ignored; there is nowhere left to report them.
    fn write_diagnostic<W: Write>(
        &self,
        w: &mut W,
        color: &str,
        head: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{head}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{head} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints a crate error using auto-detected color mode.
pub fn print_coverage_error(err: &CoverageBadgeError) {
    ErrorOutput::stderr().print_coverage_error(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
