//! Live status view and final report presentation.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use fibprime_core::SearchConfig;
use fibprime_orchestration::interfaces::{
    SearchOutcome, SearchReport, StatusReporter, StatusSnapshot,
};

use crate::output::{format_candidate, format_duration, format_number, format_rate};
use crate::ui::{
    is_color_disabled, print_detail, print_found, print_header, print_success, print_warning,
};

/// Render one snapshot as a single status line.
#[must_use]
pub fn status_line(snapshot: &StatusSnapshot) -> String {
    format!(
        "threads {}/{} | last verified {} | queue {} | {} | processed {} | {}",
        snapshot.active_workers,
        snapshot.workers,
        format_candidate(snapshot.last_verified),
        format_number(snapshot.queue_depth as u64),
        format_rate(snapshot.rate),
        format_number(snapshot.processed),
        format_duration(snapshot.elapsed),
    )
}

/// Live status view on an `indicatif` spinner.
///
/// Draws to stdout; indicatif suppresses drawing when stdout is not a
/// terminal. Quiet mode uses a hidden bar.
pub struct CliStatusReporter {
    bar: ProgressBar,
}

impl CliStatusReporter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let template = if is_color_disabled() {
            "{spinner} {msg}"
        } else {
            "{spinner:.cyan} {msg}"
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        bar.set_style(style);
        Self { bar }
    }
}

impl StatusReporter for CliStatusReporter {
    fn report(&self, snapshot: &StatusSnapshot) {
        self.bar.set_message(status_line(snapshot));
        self.bar.tick();
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}

/// Prints the start banner and the single terminal message.
pub struct CliReportPresenter {
    quiet: bool,
}

impl CliReportPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Banner naming the thread count and range. Silent in quiet mode.
    pub fn present_banner(&self, config: &SearchConfig, filter: &str) {
        if self.quiet {
            return;
        }
        print_header("fibprime");
        print_detail("Threads", &config.workers.to_string());
        print_detail(
            "Range",
            &format!(
                "[{}, {})",
                format_number(config.start),
                format_number(config.end)
            ),
        );
        print_detail("Filter", filter);
    }

    /// Exactly one terminal message, plus run totals unless quiet.
    ///
    /// Quiet mode prints the bare message without styling.
    pub fn present_report(&self, report: &SearchReport) {
        let text = outcome_message(report);
        if self.quiet {
            println!("{text}");
            return;
        }
        match report.outcome {
            SearchOutcome::Exhausted => print_success(&text),
            SearchOutcome::Counterexample { .. } => print_found(&text),
            SearchOutcome::Interrupted => print_warning(&text),
        }
        print_detail("Processed", &format_number(report.processed));
        print_detail("Primes verified", &format_number(report.primes_verified));
        print_detail("Duration", &format_duration(report.duration));
        print_detail(
            "Rate",
            &format_rate(average_rate(report.processed, report.duration)),
        );
    }
}

/// The terminal message for a finished search.
#[must_use]
pub fn outcome_message(report: &SearchReport) -> String {
    match report.outcome {
        SearchOutcome::Exhausted => format!(
            "Range exhausted: no counterexample in [{}, {}), last verified {}",
            report.start,
            report.end,
            format_candidate(report.last_verified),
        ),
        SearchOutcome::Counterexample { candidate, factor } => format!(
            "Counterexample found: {candidate} = {factor} x {}",
            candidate / factor.max(1)
        ),
        SearchOutcome::Interrupted => format!(
            "Search interrupted, last verified {}",
            format_candidate(report.last_verified)
        ),
    }
}

#[allow(clippy::cast_precision_loss)]
fn average_rate(processed: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        processed as f64 / secs
    } else {
        0.0
    }
}
