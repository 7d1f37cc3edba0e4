//! Test lifecycle types shared by the hooks and the host session
//!
//! A host runs every test item through three phases (setup, call, teardown)
//! and produces one [`PhaseReport`] per phase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a single test item's execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestPhase {
    /// Fixture/environment preparation before the test body
    Setup,
    /// The test body itself
    Call,
    /// Cleanup after the test body
    Teardown,
}

impl fmt::Display for TestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestPhase::Setup => "setup",
            TestPhase::Call => "call",
            TestPhase::Teardown => "teardown",
        };
        f.write_str(name)
    }
}

/// Result of one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// Opaque descriptor for a collected test
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestItem {
    /// Stable, fully-qualified identifier (e.g. `tests::parse::empty_input`)
    pub nodeid: String,
}

impl TestItem {
    pub fn new(nodeid: impl Into<String>) -> Self {
        Self {
            nodeid: nodeid.into(),
        }
    }
}

/// Report produced by the host when a phase completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseReport {
    /// Which phase this report describes
    pub when: TestPhase,
    pub outcome: Outcome,
    /// Elapsed wall-clock seconds, if the host measured it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl PhaseReport {
    pub fn new(when: TestPhase, outcome: Outcome, duration: Option<f64>) -> Self {
        Self {
            when,
            outcome,
            duration,
        }
    }

    pub fn failed(&self) -> bool {
        self.outcome == Outcome::Failed
    }
}

/// A phase report paired with the item it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseEvent {
    pub item: TestItem,
    pub report: PhaseReport,
}

impl PhaseEvent {
    pub fn new(item: TestItem, report: PhaseReport) -> Self {
        Self { item, report }
    }
}

/// Session exit status handed to the end-of-run hook
///
/// Codes follow the usual test-runner convention so wrappers can forward
/// them as the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    TestsFailed,
    NoTestsCollected,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::TestsFailed => 1,
            ExitStatus::NoTestsCollected => 5,
        }
    }
}
