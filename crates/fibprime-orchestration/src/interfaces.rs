//! Orchestration interfaces.

use std::time::Duration;

/// Point-in-time view of the search, built by the monitor.
///
/// Fields are read independently and may be mutually inconsistent by a
/// few candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    /// Configured worker count.
    pub workers: usize,
    /// Workers currently running.
    pub active_workers: usize,
    /// Most recently completed prime.
    pub last_verified: Option<u64>,
    /// Candidates waiting in the queue.
    pub queue_depth: usize,
    /// Smoothed throughput in candidates per second.
    pub rate: f64,
    /// Candidates classified so far.
    pub processed: u64,
    /// Candidates confirmed prime so far.
    pub primes_verified: u64,
    /// Time since the search started.
    pub elapsed: Duration,
}

/// Trait for rendering the live status of a search.
pub trait StatusReporter: Send + Sync {
    /// Render a snapshot. Called from the monitor thread.
    fn report(&self, snapshot: &StatusSnapshot);

    /// Tear down the live view. Called once, after the last `report`.
    fn complete(&self);
}

/// Null status reporter (does nothing).
pub struct NullStatusReporter;

impl StatusReporter for NullStatusReporter {
    fn report(&self, _snapshot: &StatusSnapshot) {}
    fn complete(&self) {}
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every candidate was classified and none was a counterexample.
    Exhausted,
    /// A composite passed both probabilistic stages.
    Counterexample {
        /// The composite.
        candidate: u64,
        /// Its smallest prime factor.
        factor: u64,
    },
    /// The search was cancelled from outside before finishing.
    Interrupted,
}

/// Final summary of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Inclusive lower bound searched.
    pub start: u64,
    /// Exclusive upper bound searched.
    pub end: u64,
    /// Worker count used.
    pub workers: usize,
    /// Most recently completed prime.
    pub last_verified: Option<u64>,
    /// Candidates classified.
    pub processed: u64,
    /// Candidates confirmed prime.
    pub primes_verified: u64,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl SearchReport {
    /// Whether the search found a counterexample.
    #[must_use]
    pub fn found_counterexample(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Counterexample { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reporter() {
        let reporter = NullStatusReporter;
        reporter.report(&StatusSnapshot::default());
        reporter.complete();
    }

    #[test]
    fn report_counterexample_flag() {
        let mut report = SearchReport {
            outcome: SearchOutcome::Exhausted,
            start: 3,
            end: 1_000,
            workers: 1,
            last_verified: Some(997),
            processed: 200,
            primes_verified: 80,
            duration: Duration::from_millis(5),
        };
        assert!(!report.found_counterexample());
        report.outcome = SearchOutcome::Counterexample {
            candidate: 693,
            factor: 3,
        };
        assert!(report.found_counterexample());
    }
}
