//! slowest-test - records per-test call durations and reports the slowest test
//!
//! The crate exposes two hooks a test host drives:
//!
//! - [`recorder::runtest_makereport`] wraps each phase report and logs the
//!   duration of the call phase.
//! - [`summary::terminal_summary`] runs once at the end and prints the
//!   slowest recorded test.
//!
//! [`session::Session`] owns the run-scoped [`duration_log::DurationLog`] and
//! wires the two together; [`ingest`] feeds it from JSON test events.

pub mod cli;
pub mod duration_log;
pub mod ingest;
pub mod phase;
pub mod recorder;
pub mod session;
pub mod summary;
pub mod terminal;
