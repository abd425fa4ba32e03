//! Application configuration from CLI flags.

use std::time::Duration;

use clap::Parser;

use fibprime_core::constants::{
    DEFAULT_QUEUE_CAPACITY, DEFAULT_RANGE_END, DEFAULT_RANGE_START, DEFAULT_REFRESH_INTERVAL,
};
use fibprime_core::options::default_workers;
use fibprime_core::SearchConfig;

/// Search for a composite that passes both the base-2 Fermat test and the
/// Fibonacci test F(n+1) ≡ 0 (mod n).
#[derive(Parser, Debug)]
#[command(name = "fibprime", version, about)]
pub struct AppConfig {
    /// Worker threads (values above 16 are clamped).
    /// Defaults to the available parallelism.
    #[arg(value_parser = parse_threads)]
    pub threads: Option<usize>,

    /// Inclusive lower bound of the range.
    #[arg(long, default_value_t = DEFAULT_RANGE_START)]
    pub start: u64,

    /// Exclusive upper bound of the range.
    #[arg(long, default_value_t = DEFAULT_RANGE_END)]
    pub end: u64,

    /// Maximum number of candidates waiting for a worker.
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Status refresh interval in milliseconds.
    #[arg(long, default_value_t = default_refresh_ms())]
    pub refresh_ms: u64,

    /// Quiet mode (no banner or live status, only the result line).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the library configuration. Clamping and validation happen
    /// when the orchestrator is created.
    #[must_use]
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            start: self.start,
            end: self.end,
            workers: self.threads.unwrap_or_else(default_workers),
            queue_capacity: self.queue_capacity,
            refresh_interval: Duration::from_millis(self.refresh_ms),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn default_refresh_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL.as_millis() as u64
}

/// Positive integer worker count. Upper clamping is left to the library.
fn parse_threads(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a positive integer"))?;
    if n == 0 {
        return Err("thread count must be at least 1".into());
    }
    Ok(n)
}
