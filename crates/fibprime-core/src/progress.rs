//! Shared search state and cooperative cancellation.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Counters shared between the workers, the generator and the monitor.
///
/// Every field is an independent atomic. A reader may see one field updated
/// and another stale; the monitor only needs an eventual picture.
///
/// `last_verified` is the most recently *completed* prime, not necessarily
/// the largest: with several workers, completion order differs from
/// enqueue order.
#[derive(Debug, Default)]
pub struct ProgressState {
    last_verified: AtomicU64,
    processed: AtomicU64,
    primes_verified: AtomicU64,
    active_workers: AtomicUsize,
    counterexample: AtomicU64,
    counterexample_factor: AtomicU64,
    done: AtomicBool,
}

impl ProgressState {
    /// Create a fresh state behind a shared handle.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Count one classified candidate.
    pub fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one classified candidate that turned out prime.
    pub fn record_prime(&self, candidate: u64) {
        self.processed.fetch_add(1, Ordering::Relaxed);
        self.primes_verified.fetch_add(1, Ordering::Relaxed);
        self.last_verified.store(candidate, Ordering::Relaxed);
    }

    /// Record a confirmed counterexample and set the done flag.
    ///
    /// Only the first counterexample is kept; returns `true` for that call.
    pub fn record_counterexample(&self, candidate: u64, factor: u64) -> bool {
        self.processed.fetch_add(1, Ordering::Relaxed);
        let first = self
            .counterexample
            .compare_exchange(0, candidate, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if first {
            self.counterexample_factor.store(factor, Ordering::Release);
        }
        self.mark_done();
        first
    }

    /// Set the done flag. Once set it is never cleared.
    pub fn mark_done(&self) {
        self.done.store(true, Ordering::Release);
    }

    /// Whether the search must quiesce.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Most recently completed prime, if any.
    #[must_use]
    pub fn last_verified(&self) -> Option<u64> {
        match self.last_verified.load(Ordering::Relaxed) {
            0 => None,
            n => Some(n),
        }
    }

    /// Candidates classified so far, whatever the verdict.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Candidates confirmed prime so far.
    #[must_use]
    pub fn primes_verified(&self) -> u64 {
        self.primes_verified.load(Ordering::Relaxed)
    }

    /// The first counterexample recorded, as `(candidate, factor)`.
    ///
    /// The factor is stored just after the candidate, so a reader racing
    /// the recording worker may see a factor of 0. After the workers have
    /// been joined the pair is complete.
    #[must_use]
    pub fn counterexample(&self) -> Option<(u64, u64)> {
        match self.counterexample.load(Ordering::Acquire) {
            0 => None,
            n => Some((n, self.counterexample_factor.load(Ordering::Acquire))),
        }
    }

    /// Workers currently inside their loop.
    #[must_use]
    pub fn active_workers(&self) -> usize {
        self.active_workers.load(Ordering::Relaxed)
    }

    /// Register a worker for the lifetime of the returned guard.
    #[must_use]
    pub fn enter_worker(self: &Arc<Self>) -> ActiveWorkerGuard {
        self.active_workers.fetch_add(1, Ordering::Relaxed);
        ActiveWorkerGuard {
            state: Arc::clone(self),
        }
    }
}

/// Decrements the active worker count on drop, including on unwind.
pub struct ActiveWorkerGuard {
    state: Arc<ProgressState>,
}

impl Drop for ActiveWorkerGuard {
    fn drop(&mut self) {
        self.state.active_workers.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Cooperative cancellation token using atomic bool.
///
/// Set from outside the search (Ctrl+C) and polled by the generator and the
/// workers between candidates.
///
/// # Example
/// ```
/// use fibprime_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_empty() {
        let state = ProgressState::new();
        assert_eq!(state.processed(), 0);
        assert_eq!(state.primes_verified(), 0);
        assert_eq!(state.last_verified(), None);
        assert_eq!(state.counterexample(), None);
        assert_eq!(state.active_workers(), 0);
        assert!(!state.is_done());
    }

    #[test]
    fn record_prime_updates_counters() {
        let state = ProgressState::new();
        state.record_processed();
        state.record_prime(13);
        state.record_prime(7);
        assert_eq!(state.processed(), 3);
        assert_eq!(state.primes_verified(), 2);
        // Last completed, not largest.
        assert_eq!(state.last_verified(), Some(7));
    }

    #[test]
    fn first_counterexample_wins() {
        let state = ProgressState::new();
        assert!(state.record_counterexample(693, 3));
        assert!(!state.record_counterexample(1_387, 19));
        assert_eq!(state.counterexample(), Some((693, 3)));
        assert!(state.is_done());
        assert_eq!(state.processed(), 2);
    }

    #[test]
    fn done_is_monotonic() {
        let state = ProgressState::new();
        state.mark_done();
        state.record_prime(13);
        state.mark_done();
        assert!(state.is_done());
    }

    #[test]
    fn worker_guard_tracks_active_count() {
        let state = ProgressState::new();
        let a = state.enter_worker();
        let b = state.enter_worker();
        assert_eq!(state.active_workers(), 2);
        drop(a);
        assert_eq!(state.active_workers(), 1);
        drop(b);
        assert_eq!(state.active_workers(), 0);
    }

    #[test]
    fn concurrent_increments_are_exact() {
        let state = ProgressState::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    let _guard = state.enter_worker();
                    for i in 0..1_000 {
                        if i % 2 == 0 {
                            state.record_prime(i + 1);
                        } else {
                            state.record_processed();
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(state.processed(), 8_000);
        assert_eq!(state.primes_verified(), 4_000);
        assert_eq!(state.active_workers(), 0);
    }

    #[test]
    fn cancellation_token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancellation_propagates_through_clone() {
        let token1 = CancellationToken::new();
        let token2 = token1.clone();
        token1.cancel();
        assert!(token2.is_cancelled());
    }
}
