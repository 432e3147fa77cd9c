pub mod badge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod coverage;
pub mod error;
pub mod output;

pub use error::{CoverageBadgeError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
