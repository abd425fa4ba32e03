//! Constants for search ranges, pool sizing and the factoring wheel.

use std::time::Duration;

/// Default inclusive lower bound of the searched range (2^31 - 1).
pub const DEFAULT_RANGE_START: u64 = 2_147_483_647;

/// Default exclusive upper bound of the searched range (2^32 - 1).
pub const DEFAULT_RANGE_END: u64 = 4_294_967_295;

/// Smallest accepted worker count.
pub const MIN_WORKERS: usize = 1;

/// Largest worker count; larger requests are clamped to this value.
pub const MAX_WORKERS: usize = 16;

/// Default hard capacity of the work queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 4096;

/// Default cadence of the progress monitor.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(200);

/// Rolling window used to smooth the throughput rate.
pub const RATE_WINDOW: Duration = Duration::from_secs(5);

/// Primes below the wheel modulus. The wheel skips every multiple of
/// 2, 3 and 5, so these are tested directly before the wheel starts.
pub const SMALL_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Modulus of the factoring wheel (2 * 3 * 5).
pub const WHEEL_MODULUS: u64 = 30;

/// Residues coprime to 30; every prime above 5 is congruent to one of these.
pub const WHEEL_RESIDUES: [u64; 8] = [1, 7, 11, 13, 17, 19, 23, 29];

/// Process exit codes.
pub mod exit_codes {
    /// Range exhausted without a counterexample.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Command-line usage error (reported by clap).
    pub const ERROR_USAGE: i32 = 2;
    /// A composite passed both probabilistic stages.
    pub const COUNTEREXAMPLE_FOUND: i32 = 3;
    /// Invalid search configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Search interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
