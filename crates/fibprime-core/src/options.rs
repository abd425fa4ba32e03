//! Search configuration.

use std::time::Duration;

use crate::constants::{
    DEFAULT_QUEUE_CAPACITY, DEFAULT_RANGE_END, DEFAULT_RANGE_START, DEFAULT_REFRESH_INTERVAL,
    MAX_WORKERS, MIN_WORKERS,
};
use crate::error::SearchError;

/// Options for one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Inclusive lower bound of the range.
    pub start: u64,
    /// Exclusive upper bound of the range.
    pub end: u64,
    /// Number of worker threads.
    pub workers: usize,
    /// Hard capacity of the work queue.
    pub queue_capacity: usize,
    /// Cadence of the progress monitor.
    pub refresh_interval: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_RANGE_START,
            end: DEFAULT_RANGE_END,
            workers: default_workers(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl SearchConfig {
    /// Clamp the worker count to [`MAX_WORKERS`].
    ///
    /// Zero is left alone so that [`validate`](Self::validate) rejects it.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.workers > MAX_WORKERS {
            tracing::warn!(
                requested = self.workers,
                max = MAX_WORKERS,
                "worker count clamped"
            );
            self.workers = MAX_WORKERS;
        }
        self
    }

    /// Reject configurations the search cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&self.workers) {
            return Err(SearchError::Config(format!(
                "worker count must be between {MIN_WORKERS} and {MAX_WORKERS}, got {}",
                self.workers
            )));
        }
        if self.start > self.end {
            return Err(SearchError::Config(format!(
                "range start {} is above range end {}",
                self.start, self.end
            )));
        }
        if self.queue_capacity == 0 {
            return Err(SearchError::Config(
                "queue capacity must be at least 1".into(),
            ));
        }
        if self.refresh_interval.is_zero() {
            return Err(SearchError::Config(
                "refresh interval must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Available parallelism clamped to `[MIN_WORKERS, MAX_WORKERS]`.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map_or(MIN_WORKERS, std::num::NonZeroUsize::get)
        .clamp(MIN_WORKERS, MAX_WORKERS)
}
