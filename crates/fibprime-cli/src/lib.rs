//! # fibprime-cli
//!
//! Live status view, terminal messages and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliReportPresenter, CliStatusReporter};
