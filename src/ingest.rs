//! Test event ingestion
//!
//! Reads newline-delimited JSON test events and feeds them into a
//! [`Session`]. Two formats are understood:
//!
//! - libtest's JSON output (`cargo test -- -Z unstable-options --format json
//!   --report-time`). Only finished tests produce events. `exec_time`
//!   becomes the call-phase duration.
//! - Native phase events, which can describe setup and teardown as well:
//!
//! ```text
//! {"type":"phase","name":"db::migrate","when":"setup","outcome":"passed","duration":0.8}
//! ```
//!
//! Anything that isn't a JSON object (captured test output, cargo chatter)
//! is skipped.

use std::io::{BufRead, Write};

use serde::Deserialize;
use thiserror::Error;

use crate::phase::{Outcome, PhaseEvent, PhaseReport, TestItem, TestPhase};
use crate::session::Session;

/// Errors that can occur while reading test events
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Counters for one ingestion pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read from the input
    pub lines: u64,
    /// Phase events delivered to the session
    pub events: u64,
    /// JSON-looking lines that failed to parse
    pub malformed: u64,
}

/// Status field of a libtest `test` event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LibtestStatus {
    Started,
    Ok,
    Failed,
    Ignored,
    Timeout,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawEvent {
    Test {
        name: String,
        event: LibtestStatus,
        #[serde(default)]
        exec_time: Option<f64>,
    },
    Phase {
        name: String,
        when: TestPhase,
        outcome: Outcome,
        #[serde(default)]
        duration: Option<f64>,
    },
    /// suite, bench and anything newer
    #[serde(other)]
    Other,
}

impl RawEvent {
    fn into_phase_event(self) -> Option<PhaseEvent> {
        match self {
            RawEvent::Test {
                name,
                event,
                exec_time,
            } => {
                let report = match event {
                    LibtestStatus::Ok => PhaseReport::new(TestPhase::Call, Outcome::Passed, exec_time),
                    LibtestStatus::Failed => {
                        PhaseReport::new(TestPhase::Call, Outcome::Failed, exec_time)
                    }
                    // Ignored tests never reach their body
                    LibtestStatus::Ignored => {
                        PhaseReport::new(TestPhase::Setup, Outcome::Skipped, None)
                    }
                    LibtestStatus::Started | LibtestStatus::Timeout | LibtestStatus::Unknown => {
                        return None
                    }
                };
                Some(PhaseEvent::new(TestItem::new(name), report))
            }
            RawEvent::Phase {
                name,
                when,
                outcome,
                duration,
            } => Some(PhaseEvent::new(
                TestItem::new(name),
                PhaseReport::new(when, outcome, duration),
            )),
            RawEvent::Other => None,
        }
    }
}

/// Parse a single input line
///
/// Returns `Ok(None)` for lines that carry no phase event.
pub fn parse_line(line: &str) -> Result<Option<PhaseEvent>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('{') {
        return Ok(None);
    }

    let raw: RawEvent = serde_json::from_str(trimmed)?;
    Ok(raw.into_phase_event())
}

/// Read every line of `reader` into `session`
///
/// When `echo` is set, each line is copied to it byte-for-byte before
/// parsing. Lines are decoded lossily, so stray binary output from a test
/// cannot end the run. Malformed events are logged and skipped; only I/O
/// failures abort.
pub fn drive<R: BufRead>(
    session: &mut Session,
    mut reader: R,
    mut echo: Option<&mut dyn Write>,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines += 1;

        if let Some(out) = echo.as_mut() {
            out.write_all(&buf)?;
            if !buf.ends_with(b"\n") {
                out.write_all(b"\n")?;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        match parse_line(&line) {
            Ok(Some(event)) => {
                tracing::trace!(test = %event.item.nodeid, when = %event.report.when, "phase event");
                session.observe(event);
                stats.events += 1;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(line = stats.lines, "Skipping malformed event: {}", e);
                stats.malformed += 1;
            }
        }
    }

    if let Some(out) = echo.as_mut() {
        out.flush()?;
    }

    tracing::debug!(?stats, "ingestion complete");
    Ok(stats)
}
