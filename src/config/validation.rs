//! Configuration semantic validation.

use crate::config::Config;
use crate::{CoverageBadgeError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the badge label, the output path, or the input path is empty.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.badge.label.trim().is_empty() {
        return Err(CoverageBadgeError::Config(
            "badge.label cannot be empty".to_string(),
        ));
    }

    if config.badge.output.as_os_str().is_empty() {
        return Err(CoverageBadgeError::Config(
            "badge.output cannot be empty".to_string(),
        ));
    }

    if config.input.path.as_os_str().is_empty() {
        return Err(CoverageBadgeError::Config(
            "input.path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
