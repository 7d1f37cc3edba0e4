//! Run-scoped log of per-test call durations
//!
//! The log is append-only and owned by a single [`crate::session::Session`].
//! Only the duration recorder may append to it; everything else reads.

use serde::Serialize;

/// Measured duration of one test's call phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRecord {
    /// Fully-qualified test identifier (not required to be unique)
    pub name: String,
    /// Wall-clock seconds, always finite and non-negative
    pub duration: f64,
}

/// Ordered, append-only sequence of [`TestRecord`]s
#[derive(Debug, Default)]
pub struct DurationLog {
    records: Vec<TestRecord>,
}

impl DurationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: TestRecord) {
        self.records.push(record);
    }

    /// Records in insertion order
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record with the largest duration
    ///
    /// Ties go to the earliest record. `Iterator::max_by` keeps the last of
    /// equal elements, so the scan is written out.
    pub fn slowest(&self) -> Option<&TestRecord> {
        self.records.iter().reduce(|best, record| {
            if record.duration > best.duration {
                record
            } else {
                best
            }
        })
    }
}
