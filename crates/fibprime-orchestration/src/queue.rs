//! Bounded work queue between the generator and the workers.
//!
//! Items travel over a bounded crossbeam channel, so a full queue blocks the
//! producer. Shutdown is broadcast by dropping the only sender of a
//! never-written channel: once it disconnects, every `select!` waiting on it
//! wakes at once. Producers and consumers watch separate broadcasts.
//!
//! Every send happens while holding the send gate, and shutdown sets the
//! closed flag under the same gate. A candidate is therefore either enqueued
//! before shutdown or rejected, and consumers are told to drain only after
//! the last accepted send has landed.

use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{bounded, select, Receiver, Sender, TryRecvError};
use parking_lot::Mutex;

use fibprime_core::SearchError;

/// Bounded FIFO of candidates with broadcast shutdown.
pub struct WorkQueue {
    tx: Sender<u64>,
    rx: Receiver<u64>,
    send_gate: Mutex<()>,
    /// Wakes producers blocked on a full queue.
    wake_tx: Mutex<Option<Sender<()>>>,
    wake_rx: Receiver<()>,
    /// Tells consumers no further candidate can arrive.
    closed_tx: Mutex<Option<Sender<()>>>,
    closed_rx: Receiver<()>,
    closed: AtomicBool,
    capacity: usize,
}

impl WorkQueue {
    /// Create a queue holding at most `capacity` pending candidates.
    ///
    /// A capacity of 0 is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, rx) = bounded(capacity);
        let (wake_tx, wake_rx) = bounded(0);
        let (closed_tx, closed_rx) = bounded(0);
        Self {
            tx,
            rx,
            send_gate: Mutex::new(()),
            wake_tx: Mutex::new(Some(wake_tx)),
            wake_rx,
            closed_tx: Mutex::new(Some(closed_tx)),
            closed_rx,
            closed: AtomicBool::new(false),
            capacity,
        }
    }

    /// Append a candidate, blocking while the queue is full.
    ///
    /// Fails with [`SearchError::QueueClosed`] if shutdown was requested
    /// before or while waiting for room. A successful push always lands
    /// before shutdown completes.
    pub fn push(&self, candidate: u64) -> Result<(), SearchError> {
        let _gate = self.send_gate.lock();
        if self.is_shutdown() {
            return Err(SearchError::QueueClosed(candidate));
        }
        select! {
            send(self.tx, candidate) -> res => {
                res.map_err(|_| SearchError::QueueClosed(candidate))
            }
            recv(self.wake_rx) -> _ => Err(SearchError::QueueClosed(candidate)),
        }
    }

    /// Take the oldest candidate, blocking until one arrives or shutdown.
    ///
    /// Returns `None` only once shutdown has completed and the queue is
    /// empty, so every accepted candidate is still handed out.
    pub fn pop(&self) -> Option<u64> {
        match self.rx.try_recv() {
            Ok(candidate) => return Some(candidate),
            Err(TryRecvError::Disconnected) => return None,
            Err(TryRecvError::Empty) => {}
        }
        select! {
            recv(self.rx) -> msg => msg.ok(),
            recv(self.closed_rx) -> _ => self.rx.try_recv().ok(),
        }
    }

    /// Stop accepting candidates and wake every blocked producer and
    /// consumer. Calling it again has no effect.
    pub fn request_shutdown(&self) {
        // A producer parked on a full queue holds the gate until woken.
        drop(self.wake_tx.lock().take());
        let _gate = self.send_gate.lock();
        self.closed.store(true, Ordering::Release);
        if self.closed_tx.lock().take().is_some() {
            tracing::debug!(pending = self.depth(), "work queue shut down");
        }
    }

    /// Whether shutdown has been requested.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Number of pending candidates.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.rx.len()
    }

    /// Maximum number of pending candidates.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
