//! fibprime — search for a base-2 Fermat and Fibonacci pseudoprime.

use std::process::ExitCode;

use fibprime_core::constants::exit_codes;
use fibprime_lib::errors::to_exit_code;
use fibprime_lib::{app, config};

fn main() -> ExitCode {
    // Initialize tracing on stderr; stdout carries the search output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(code) => to_exit_code(code),
        Err(e) => {
            fibprime_cli::ui::print_error(&format!("{e:#}"));
            to_exit_code(exit_codes::ERROR_GENERIC)
        }
    }
}
