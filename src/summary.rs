//! Slowest-test summary hook
//!
//! Runs once after the session finishes and reports the single slowest
//! call phase recorded in the [`DurationLog`].

use crate::duration_log::{DurationLog, TestRecord};
use crate::phase::ExitStatus;
use crate::terminal::SummarySink;

/// Title of the summary section
pub const SLOWEST_TEST_TITLE: &str = "Slowest Test";

/// Write the slowest-test section to `sink`
///
/// Writes nothing when the log is empty. The log is only read, so repeated
/// calls produce identical output.
pub fn terminal_summary(log: &DurationLog, sink: &mut dyn SummarySink, exit_status: ExitStatus) {
    let Some(slowest) = log.slowest() else {
        tracing::debug!(?exit_status, "no call durations recorded, skipping summary");
        return;
    };

    tracing::debug!(
        ?exit_status,
        recorded = log.len(),
        test = %slowest.name,
        "reporting slowest test"
    );

    sink.write_sep('=', SLOWEST_TEST_TITLE);
    sink.write_line(&format_slowest(slowest));
    sink.write_line("");
}

/// Render the body line for `record`, e.g. `  tests::a: 0.5000s`
pub fn format_slowest(record: &TestRecord) -> String {
    format!("  {}: {:.4}s", record.name, record.duration)
}
