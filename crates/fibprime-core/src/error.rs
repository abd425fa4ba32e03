//! Error type shared by the search crates.

/// Error type for search setup and coordination.
///
/// Candidates that fail a probabilistic stage are not errors, and a
/// confirmed counterexample is a [`Verdict`](crate::filter::Verdict), not an
/// error either. An interrupted search ends with a report, not an error.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid search configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The work queue was shut down while a candidate was being pushed.
    #[error("work queue closed before candidate {0} could be enqueued")]
    QueueClosed(u64),

    /// A search thread could not be started.
    #[error("failed to spawn {0}")]
    Spawn(String),
}
