use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::coverage::CoverageFormat;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "coverage-badge")]
#[command(author, version, about = "Generate an SVG coverage badge from an lcov trace or JSON summary")]
#[command(long_about = "Reads a coverage report, computes the covered-line percentage and \
    writes a shields-style SVG badge colored by coverage tier.\n\n\
    Exit codes:\n  \
    0 - Badge written\n  \
    1 - Coverage file missing or coverage out of range\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Coverage report to read [default: coverage/lcov.info]
    pub input: Option<PathBuf>,

    /// Report format (auto picks json for *.json, lcov otherwise)
    #[arg(short, long, value_enum)]
    pub format: Option<CoverageFormat>,

    /// Badge output path [default: coverage_badge.svg]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text of the badge's left segment [default: coverage]
    #[arg(long)]
    pub label: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Write a default .coverage-badge.toml and exit
    #[arg(long, conflicts_with_all = ["input", "format", "output", "label", "config"])]
    pub init: bool,

    /// Overwrite an existing configuration file (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
