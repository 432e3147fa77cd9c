use clap::Parser;

use coverage_badge::cli::Cli;
use coverage_badge::commands::{run_generate, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = if cli.init {
        run_init(cli.force)
    } else {
        run_generate(&cli)
    };

    std::process::exit(exit_code);
}
