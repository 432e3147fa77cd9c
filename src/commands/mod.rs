pub mod generate;
pub mod init;

pub use generate::{GenerateOptions, generate, load_config, run_generate, run_generate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
