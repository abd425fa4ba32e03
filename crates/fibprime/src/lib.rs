//! fibprime library — application logic for the counterexample search binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
