//! Worker loop and the pool that runs it.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use fibprime_core::{CancellationToken, CandidateFilter, ProgressState, SearchError, Verdict};

use crate::queue::WorkQueue;

/// Per-worker tallies, logged when the worker exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Candidates this worker classified.
    pub classified: u64,
    /// Of those, how many were prime.
    pub primes: u64,
}

/// One consumer of the work queue.
pub struct Worker {
    id: usize,
    queue: Arc<WorkQueue>,
    state: Arc<ProgressState>,
    filter: Arc<dyn CandidateFilter>,
    cancel: CancellationToken,
}

impl Worker {
    /// Create a worker over shared search state.
    #[must_use]
    pub fn new(
        id: usize,
        queue: Arc<WorkQueue>,
        state: Arc<ProgressState>,
        filter: Arc<dyn CandidateFilter>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            id,
            queue,
            state,
            filter,
            cancel,
        }
    }

    /// Pop and classify candidates until the queue closes, the done flag is
    /// set, or the search is cancelled.
    ///
    /// A confirmed counterexample sets the done flag and shuts the queue
    /// down so the generator and the other workers stop promptly.
    pub fn run(&self) -> WorkerStats {
        let _active = self.state.enter_worker();
        let mut stats = WorkerStats::default();
        debug!(worker = self.id, "worker started");

        while let Some(candidate) = self.queue.pop() {
            if self.state.is_done() || self.cancel.is_cancelled() {
                break;
            }
            stats.classified += 1;
            match self.filter.classify(candidate) {
                Verdict::FilteredOut => self.state.record_processed(),
                Verdict::Prime => {
                    stats.primes += 1;
                    self.state.record_prime(candidate);
                }
                Verdict::CompositeConfirmed { candidate, factor } => {
                    if self.state.record_counterexample(candidate, factor) {
                        warn!(
                            worker = self.id,
                            candidate, factor, "composite passed Fermat and Fibonacci tests"
                        );
                    }
                    self.queue.request_shutdown();
                    break;
                }
            }
        }

        debug!(
            worker = self.id,
            classified = stats.classified,
            primes = stats.primes,
            "worker finished"
        );
        stats
    }
}

/// Fixed-size pool of named worker threads.
pub struct WorkerPool {
    pool: ThreadPool,
    size: usize,
}

impl WorkerPool {
    /// Build a pool with `size` threads named `fibprime-worker-{i}`.
    pub fn new(size: usize) -> Result<Self, SearchError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(size)
            .thread_name(|i| format!("fibprime-worker-{i}"))
            .build()
            .map_err(|e| SearchError::Spawn(format!("worker pool: {e}")))?;
        Ok(Self { pool, size })
    }

    /// Number of threads in the pool.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run `workers` on the pool while `feed` runs on the calling thread.
    ///
    /// Returns once `feed` has returned and every worker has exited. The
    /// queue is shut down when `feed` returns or unwinds, so workers never
    /// wait on a producer that is gone.
    pub fn run<F, R>(&self, workers: Vec<Worker>, queue: &WorkQueue, feed: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.pool.in_place_scope(|scope| {
            for worker in workers {
                scope.spawn(move |_| {
                    worker.run();
                });
            }
            let _shutdown = ShutdownOnDrop(queue);
            feed()
        })
    }
}

struct ShutdownOnDrop<'a>(&'a WorkQueue);

impl Drop for ShutdownOnDrop<'_> {
    fn drop(&mut self) {
        self.0.request_shutdown();
    }
}
