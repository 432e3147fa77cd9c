use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LOCAL_CONFIG_NAME;
use crate::{CoverageBadgeError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(force: bool) -> i32 {
    match run_init_impl(Path::new(LOCAL_CONFIG_NAME), force) {
        Ok(path) => {
            println!("Created configuration file: {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_coverage_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration template to `output_path`.
///
/// # Errors
/// Returns an error if the file already exists (without `force`) or cannot be written.
pub fn run_init_impl(output_path: &Path, force: bool) -> Result<PathBuf> {
    if output_path.exists() && !force {
        return Err(CoverageBadgeError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(output_path.to_path_buf())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# coverage-badge configuration file

[input]
# Coverage report to read (default: "coverage/lcov.info")
path = "coverage/lcov.info"

# Report format: "auto" (by extension), "lcov", or "json" (default: "auto")
format = "auto"

[badge]
# Text of the left segment (default: "coverage")
label = "coverage"

# Output SVG file, overwritten on every run (default: "coverage_badge.svg")
output = "coverage_badge.svg"
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
