//! Duration recorder hook
//!
//! Observes phase reports after the host has finalized them and appends the
//! call-phase duration of each test to the session's [`DurationLog`].

use crate::duration_log::{DurationLog, TestRecord};
use crate::phase::{PhaseReport, TestItem, TestPhase};

/// Wrap the host's report construction for one phase
///
/// `make_report` runs to completion first, whatever its outcome. The log is
/// updated afterwards and the report is handed back untouched.
///
/// # Example
/// ```
/// use slowest_test::duration_log::DurationLog;
/// use slowest_test::phase::{Outcome, PhaseReport, TestItem, TestPhase};
/// use slowest_test::recorder::runtest_makereport;
///
/// let mut log = DurationLog::new();
/// let item = TestItem::new("tests::it_works");
/// let report = runtest_makereport(&mut log, &item, || {
///     PhaseReport::new(TestPhase::Call, Outcome::Failed, Some(0.25))
/// });
/// assert_eq!(report.outcome, Outcome::Failed);
/// assert_eq!(log.len(), 1);
/// ```
pub fn runtest_makereport<F>(log: &mut DurationLog, item: &TestItem, make_report: F) -> PhaseReport
where
    F: FnOnce() -> PhaseReport,
{
    let report = make_report();
    record_report(log, item, &report);
    report
}

/// Append a record for `report` if it describes a timed call phase
///
/// Returns `true` when a record was appended.
pub fn record_report(log: &mut DurationLog, item: &TestItem, report: &PhaseReport) -> bool {
    if report.when != TestPhase::Call {
        return false;
    }

    match report.duration {
        Some(duration) if duration.is_finite() && duration >= 0.0 => {
            tracing::trace!(test = %item.nodeid, duration, "recording call duration");
            log.append(TestRecord {
                name: item.nodeid.clone(),
                duration,
            });
            true
        }
        Some(duration) => {
            tracing::debug!(test = %item.nodeid, duration, "unusable call duration, not recorded");
            false
        }
        None => {
            tracing::debug!(test = %item.nodeid, "call phase without duration, not recorded");
            false
        }
    }
}
