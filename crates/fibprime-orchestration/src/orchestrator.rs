//! Search orchestration: wires generator, queue, workers and monitor.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use fibprime_core::{
    CancellationToken, CandidateFilter, CandidateRange, ProgressState, SearchConfig, SearchError,
};

use crate::interfaces::{SearchOutcome, SearchReport, StatusReporter};
use crate::monitor::{Monitor, MonitorContext};
use crate::queue::WorkQueue;
use crate::worker::{Worker, WorkerPool};

/// Runs one search over a validated configuration.
pub struct SearchOrchestrator {
    config: SearchConfig,
    filter: Arc<dyn CandidateFilter>,
}

impl SearchOrchestrator {
    /// Normalize and validate `config`.
    ///
    /// Worker counts above the maximum are clamped; anything else out of
    /// range is a [`SearchError::Config`].
    pub fn new(
        config: SearchConfig,
        filter: Arc<dyn CandidateFilter>,
    ) -> Result<Self, SearchError> {
        let config = config.normalize();
        config.validate()?;
        Ok(Self { config, filter })
    }

    /// The effective configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search every candidate in the configured range.
    pub fn run(
        &self,
        reporter: Arc<dyn StatusReporter>,
        cancel: &CancellationToken,
    ) -> Result<SearchReport, SearchError> {
        let range = CandidateRange::new(self.config.start, self.config.end);
        self.run_with_candidates(range, reporter, cancel)
    }

    /// Search an arbitrary candidate sequence with the configured pool.
    ///
    /// The sequence is fed in order; the report still carries the
    /// configured range bounds.
    pub fn run_with_candidates<I>(
        &self,
        candidates: I,
        reporter: Arc<dyn StatusReporter>,
        cancel: &CancellationToken,
    ) -> Result<SearchReport, SearchError>
    where
        I: IntoIterator<Item = u64>,
    {
        let started = Instant::now();
        let state = ProgressState::new();
        let queue = Arc::new(WorkQueue::new(self.config.queue_capacity));

        info!(
            start = self.config.start,
            end = self.config.end,
            workers = self.config.workers,
            filter = self.filter.name(),
            "search started"
        );

        let monitor = Monitor::start(
            MonitorContext {
                state: Arc::clone(&state),
                queue: Arc::clone(&queue),
                workers: self.config.workers,
                started,
            },
            self.config.refresh_interval,
            reporter,
        )?;

        let pool = match WorkerPool::new(self.config.workers) {
            Ok(pool) => pool,
            Err(e) => {
                monitor.stop();
                return Err(e);
            }
        };

        let workers = (0..pool.size())
            .map(|id| {
                Worker::new(
                    id,
                    Arc::clone(&queue),
                    Arc::clone(&state),
                    Arc::clone(&self.filter),
                    cancel.clone(),
                )
            })
            .collect();

        let fed = pool.run(workers, &queue, || feed(candidates, &queue, &state, cancel));
        monitor.stop();
        debug!(fed, "generator finished");

        let outcome = match state.counterexample() {
            Some((candidate, factor)) => SearchOutcome::Counterexample { candidate, factor },
            None if cancel.is_cancelled() => SearchOutcome::Interrupted,
            None => SearchOutcome::Exhausted,
        };

        let report = SearchReport {
            outcome,
            start: self.config.start,
            end: self.config.end,
            workers: self.config.workers,
            last_verified: state.last_verified(),
            processed: state.processed(),
            primes_verified: state.primes_verified(),
            duration: started.elapsed(),
        };
        info!(
            outcome = ?report.outcome,
            processed = report.processed,
            primes = report.primes_verified,
            "search finished"
        );
        Ok(report)
    }
}

/// Push candidates until the sequence ends, the search is done or
/// cancelled, or the queue closes. Returns how many were enqueued.
fn feed<I>(
    candidates: I,
    queue: &WorkQueue,
    state: &ProgressState,
    cancel: &CancellationToken,
) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut fed = 0;
    for candidate in candidates {
        if state.is_done() || cancel.is_cancelled() {
            break;
        }
        if queue.push(candidate).is_err() {
            break;
        }
        fed += 1;
    }
    queue.request_shutdown();
    fed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NullStatusReporter;
    use fibprime_core::{PswFilter, Verdict};
    use std::time::Duration;

    fn config(start: u64, end: u64, workers: usize) -> SearchConfig {
        SearchConfig {
            start,
            end,
            workers,
            queue_capacity: 64,
            refresh_interval: Duration::from_millis(20),
        }
    }

    fn orchestrator(start: u64, end: u64, workers: usize) -> SearchOrchestrator {
        SearchOrchestrator::new(config(start, end, workers), Arc::new(PswFilter::new())).unwrap()
    }

    #[test]
    fn single_worker_last_verified_is_largest_prime() {
        let report = orchestrator(3, 1_000, 1)
            .run(Arc::new(NullStatusReporter), &CancellationToken::new())
            .unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.last_verified, Some(997));
        assert!(report.primes_verified > 0);
        assert!(report.processed >= report.primes_verified);
    }

    #[test]
    fn many_workers_exhaust_range() {
        let report = orchestrator(3, 200_000, 8)
            .run(Arc::new(NullStatusReporter), &CancellationToken::new())
            .unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.workers, 8);
        let expected = CandidateRange::new(3, 200_000).count() as u64;
        assert_eq!(report.processed, expected);
        let last = report.last_verified.unwrap();
        assert!((3..200_000).contains(&last));
    }

    #[test]
    fn empty_range_is_exhausted_immediately() {
        let report = orchestrator(10, 10, 2)
            .run(Arc::new(NullStatusReporter), &CancellationToken::new())
            .unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.processed, 0);
        assert_eq!(report.last_verified, None);
    }

    #[test]
    fn cancelled_before_start_is_interrupted() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let report = orchestrator(3, 1_000_000, 4)
            .run(Arc::new(NullStatusReporter), &cancel)
            .unwrap();
        assert_eq!(report.outcome, SearchOutcome::Interrupted);
        assert_eq!(report.processed, 0);
    }

    #[test]
    fn oversized_worker_count_is_clamped() {
        let orch = orchestrator(3, 100, 64);
        assert_eq!(orch.config().workers, fibprime_core::MAX_WORKERS);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = SearchOrchestrator::new(config(3, 100, 0), Arc::new(PswFilter::new()));
        assert!(matches!(result, Err(SearchError::Config(_))));
        let result = SearchOrchestrator::new(config(100, 3, 1), Arc::new(PswFilter::new()));
        assert!(matches!(result, Err(SearchError::Config(_))));
    }

    struct Planted(u64);

    impl CandidateFilter for Planted {
        fn classify(&self, candidate: u64) -> Verdict {
            if candidate == self.0 {
                fibprime_core::filter::verify(candidate)
            } else {
                fibprime_core::classify(candidate)
            }
        }

        fn name(&self) -> &str {
            "planted"
        }
    }

    #[test]
    fn planted_counterexample_stops_search() {
        let orch =
            SearchOrchestrator::new(config(3, 10_000_000, 4), Arc::new(Planted(693))).unwrap();
        let begin = Instant::now();
        let report = orch
            .run(Arc::new(NullStatusReporter), &CancellationToken::new())
            .unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcome::Counterexample {
                candidate: 693,
                factor: 3
            }
        );
        assert!(report.found_counterexample());
        assert!(begin.elapsed() < Duration::from_secs(10));
        // Far fewer than the ~4M candidates in the range.
        assert!(report.processed < 1_000_000);
    }
}
