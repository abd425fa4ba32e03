//! # fibprime-orchestration
//!
//! Bounded work queue, worker pool, progress monitor and the orchestrator
//! that runs a counterexample search end to end.

pub mod interfaces;
pub mod monitor;
pub mod orchestrator;
pub mod queue;
pub mod worker;

pub use interfaces::{
    NullStatusReporter, SearchOutcome, SearchReport, StatusReporter, StatusSnapshot,
};
pub use orchestrator::SearchOrchestrator;
pub use queue::WorkQueue;
