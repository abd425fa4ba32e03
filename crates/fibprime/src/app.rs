//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};

use fibprime_cli::presenter::{CliReportPresenter, CliStatusReporter};
use fibprime_cli::ui::print_error;
use fibprime_core::constants::exit_codes;
use fibprime_core::{CancellationToken, CandidateFilter, PswFilter};
use fibprime_orchestration::SearchOrchestrator;

use crate::config::AppConfig;
use crate::errors::{handle_error, outcome_exit_code};
use crate::version::full_version;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibprime_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    run_search(config)
}

fn run_search(config: &AppConfig) -> Result<i32> {
    let filter = Arc::new(PswFilter::new());
    let orchestrator = match SearchOrchestrator::new(config.to_search_config(), filter.clone()) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(handle_error(&e));
        }
    };
    tracing::info!(version = %full_version(), "configuration accepted");

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let presenter = CliReportPresenter::new(config.quiet);
    presenter.present_banner(orchestrator.config(), filter.name());

    let reporter = Arc::new(CliStatusReporter::new(config.quiet));
    match orchestrator.run(reporter, &cancel) {
        Ok(report) => {
            presenter.present_report(&report);
            Ok(outcome_exit_code(&report.outcome))
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(handle_error(&e))
        }
    }
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("failed to set Ctrl+C handler")
}
