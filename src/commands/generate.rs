use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::badge::{BadgeBuilder, write_badge};
use crate::cli::Cli;
use crate::config::{
    BadgeConfig, Config, ConfigLoader, FileConfigLoader, InputConfig, validate_config_semantics,
};
use crate::coverage::{Coverage, CoverageFormat, extract};
use crate::output::{BadgeSummary, ColorMode, ErrorOutput, SummaryFormatter};
use crate::{CoverageBadgeError, EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, Result};

/// Effective settings for one run: CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub format: CoverageFormat,
    pub output: PathBuf,
    pub label: String,
}

impl GenerateOptions {
    #[must_use]
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            input: cli.input.clone().unwrap_or_else(|| config.input.path.clone()),
            format: cli.format.unwrap_or(config.input.format),
            output: cli.output.clone().unwrap_or_else(|| config.badge.output.clone()),
            label: cli.label.clone().unwrap_or_else(|| config.badge.label.clone()),
        }
    }

    /// Runs the config validator over the merged settings, so CLI values
    /// are held to the same rules as file values.
    fn validate(&self) -> Result<()> {
        validate_config_semantics(&Config {
            input: InputConfig {
                path: self.input.clone(),
                format: self.format,
            },
            badge: BadgeConfig {
                label: self.label.clone(),
                output: self.output.clone(),
            },
        })
    }
}

#[must_use]
pub fn run_generate(cli: &Cli) -> i32 {
    let color_mode = ColorMode::from(cli.color);
    let errors = ErrorOutput::new(color_mode);

    match run_generate_impl(cli, &errors) {
        Ok(summary) => {
            if !cli.quiet {
                let use_colors = color_mode.use_colors(std::io::stdout().is_terminal());
                print!("{}", SummaryFormatter::new(use_colors, cli.verbose).format(&summary));
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            errors.print_coverage_error(&e);
            exit_code_for(&e)
        }
    }
}

const fn exit_code_for(err: &CoverageBadgeError) -> i32 {
    match err {
        CoverageBadgeError::InputNotFound(_) | CoverageBadgeError::OutOfRange(_) => {
            EXIT_INPUT_ERROR
        }
        _ => EXIT_CONFIG_ERROR,
    }
}

/// Loads configuration, resolves options and generates the badge.
///
/// # Errors
/// Returns an error if the configuration is invalid, the input file does not
/// exist, coverage is out of range, or the badge cannot be written.
pub fn run_generate_impl(cli: &Cli, errors: &ErrorOutput) -> Result<BadgeSummary> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let options = GenerateOptions::resolve(cli, &config);
    options.validate()?;
    generate(&options, errors)
}

/// Loads configuration from an explicit path, the default locations, or
/// returns defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if a configuration file cannot be read or is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Reads coverage and writes the badge.
///
/// A missing input is an error and nothing is written. Any other read or
/// parse failure is reported as a warning and the badge shows 0.0%.
///
/// # Errors
/// Returns `InputNotFound`, `OutOfRange`, or an IO error from writing the badge.
pub fn generate(options: &GenerateOptions, errors: &ErrorOutput) -> Result<BadgeSummary> {
    if !options.input.exists() {
        return Err(CoverageBadgeError::InputNotFound(options.input.clone()));
    }

    let format = options.format.resolve(&options.input);
    let (coverage, degraded) = match extract(&options.input, format) {
        Ok(coverage) => (coverage, false),
        Err(e) => {
            let detail = e.detail().unwrap_or_else(|| e.to_string());
            errors.print_warning(
                &format!("Could not read coverage from {}", options.input.display()),
                Some(&detail),
                Some("The badge will show 0.0%"),
            );
            (Coverage::zero(), true)
        }
    };

    if !coverage.is_in_range() {
        return Err(CoverageBadgeError::OutOfRange(coverage.percentage));
    }

    let tier = coverage.tier();
    let svg = BadgeBuilder::new(coverage.display.as_str(), tier)
        .with_label(options.label.as_str())
        .build();
    write_badge(&options.output, &svg)?;

    Ok(BadgeSummary {
        input: options.input.clone(),
        format,
        output: options.output.clone(),
        display: coverage.display,
        tier,
        totals: coverage.totals,
        degraded,
    })
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
