//! Test session orchestration
//!
//! A [`Session`] owns the [`DurationLog`] for one run and routes every phase
//! report through the duration recorder. When the run is over,
//! [`Session::finish`] hands the log to the summary hook. Two sessions never
//! share state.

use std::collections::HashSet;

use crate::duration_log::DurationLog;
use crate::phase::{ExitStatus, PhaseEvent, PhaseReport, TestItem};
use crate::recorder;
use crate::summary;
use crate::terminal::SummarySink;

/// State for a single test run
#[derive(Debug, Default)]
pub struct Session {
    log: DurationLog,
    /// Node ids of every item that reported at least one phase
    seen: HashSet<String>,
    /// Number of phase reports with a failed outcome
    failures: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one phase of `item` through the recorder hook
    pub fn run_phase<F>(&mut self, item: &TestItem, make_report: F) -> PhaseReport
    where
        F: FnOnce() -> PhaseReport,
    {
        let report = recorder::runtest_makereport(&mut self.log, item, make_report);
        self.tally(item, &report);
        report
    }

    /// Feed an already-built phase event into the session
    pub fn observe(&mut self, event: PhaseEvent) -> PhaseReport {
        let PhaseEvent { item, report } = event;
        self.run_phase(&item, move || report)
    }

    fn tally(&mut self, item: &TestItem, report: &PhaseReport) {
        self.seen.insert(item.nodeid.clone());
        if report.failed() {
            self.failures += 1;
        }
    }

    pub fn duration_log(&self) -> &DurationLog {
        &self.log
    }

    /// Number of distinct test items that reported
    pub fn tests_seen(&self) -> usize {
        self.seen.len()
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.failures > 0 {
            ExitStatus::TestsFailed
        } else if self.seen.is_empty() {
            ExitStatus::NoTestsCollected
        } else {
            ExitStatus::Ok
        }
    }

    /// End the run: invoke the summary hook and return the exit status
    pub fn finish(&self, sink: &mut dyn SummarySink) -> ExitStatus {
        let status = self.exit_status();
        tracing::debug!(
            tests = self.tests_seen(),
            failures = self.failures,
            recorded = self.log.len(),
            "session finished"
        );
        summary::terminal_summary(&self.log, sink, status);
        status
    }
}
