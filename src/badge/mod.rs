//! SVG badge rendering.
//!
//! A badge is a fixed 98×20 two-segment bar: a grey label segment on the left
//! and a value segment on the right whose fill comes from the coverage tier.

mod builder;
mod format;
mod style;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use builder::{BadgeBuilder, DEFAULT_LABEL};
pub use format::xml_escape;
pub use style::ColorTier;

/// Default output file, relative to the working directory.
pub const DEFAULT_BADGE_PATH: &str = "coverage_badge.svg";

/// Write rendered markup to `path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_badge(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
