//! # fibprime-core
//!
//! Core library for the fibprime counterexample search: `u64` modular
//! arithmetic, the Fermat / Fibonacci / trial-division filter, the candidate
//! generator for residues ±2 (mod 5), and the state shared by the search
//! threads.

pub mod constants;
pub mod error;
pub mod filter;
pub mod generator;
pub mod modular;
pub mod options;
pub mod progress;
pub mod wheel;

// Re-exports
pub use constants::{exit_codes, MAX_WORKERS, MIN_WORKERS};
pub use error::SearchError;
pub use filter::{classify, CandidateFilter, PswFilter, Verdict};
pub use generator::CandidateRange;
pub use options::SearchConfig;
pub use progress::{CancellationToken, ProgressState};
