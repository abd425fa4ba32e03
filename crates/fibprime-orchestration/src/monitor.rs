//! Periodic progress monitor.
//!
//! Runs on its own thread, sampling the shared [`ProgressState`] at a fixed
//! cadence and handing a [`StatusSnapshot`] to a [`StatusReporter`]. It never
//! mutates search state.

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use tracing::debug;

use fibprime_core::constants::RATE_WINDOW;
use fibprime_core::{ProgressState, SearchError};

use crate::interfaces::{StatusReporter, StatusSnapshot};
use crate::queue::WorkQueue;

/// Throughput over a rolling window of `(instant, processed)` samples.
#[derive(Debug)]
pub struct RateTracker {
    window: Duration,
    samples: VecDeque<(Instant, u64)>,
}

impl RateTracker {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
        }
    }

    /// Add a sample and return the rate in candidates per second across
    /// the samples still inside the window. Returns 0 until two samples
    /// span a non-zero interval.
    pub fn record(&mut self, now: Instant, processed: u64) -> f64 {
        self.samples.push_back((now, processed));
        while let Some(&(at, _)) = self.samples.front() {
            if now.saturating_duration_since(at) > self.window {
                self.samples.pop_front();
            } else {
                break;
            }
        }

        let (Some(&(first_at, first)), Some(&(last_at, last))) =
            (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let span = last_at.saturating_duration_since(first_at).as_secs_f64();
        if span > 0.0 {
            last.saturating_sub(first) as f64 / span
        } else {
            0.0
        }
    }
}

/// Sources the monitor reads from.
pub struct MonitorContext {
    pub state: Arc<ProgressState>,
    pub queue: Arc<WorkQueue>,
    pub workers: usize,
    pub started: Instant,
}

impl MonitorContext {
    fn snapshot(&self, rate: f64) -> StatusSnapshot {
        StatusSnapshot {
            workers: self.workers,
            active_workers: self.state.active_workers(),
            last_verified: self.state.last_verified(),
            queue_depth: self.queue.depth(),
            rate,
            processed: self.state.processed(),
            primes_verified: self.state.primes_verified(),
            elapsed: self.started.elapsed(),
        }
    }
}

/// Handle to a running monitor thread.
pub struct Monitor {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl Monitor {
    /// Spawn the monitor thread, reporting every `interval`.
    pub fn start(
        ctx: MonitorContext,
        interval: Duration,
        reporter: Arc<dyn StatusReporter>,
    ) -> Result<Self, SearchError> {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = thread::Builder::new()
            .name("fibprime-monitor".into())
            .spawn(move || {
                let mut rate = RateTracker::new(RATE_WINDOW);
                loop {
                    let stopping = !matches!(
                        stop_rx.recv_timeout(interval),
                        Err(RecvTimeoutError::Timeout)
                    );
                    let current = rate.record(Instant::now(), ctx.state.processed());
                    reporter.report(&ctx.snapshot(current));
                    if stopping {
                        break;
                    }
                }
                reporter.complete();
                debug!("monitor stopped");
            })
            .map_err(|e| SearchError::Spawn(format!("monitor thread: {e}")))?;
        Ok(Self { stop_tx, handle })
    }

    /// Emit a final snapshot, tear down the reporter and join the thread.
    pub fn stop(self) {
        drop(self.stop_tx);
        if self.handle.join().is_err() {
            tracing::error!("monitor thread panicked");
        }
    }
}
