//! Summary output sink
//!
//! [`TerminalReporter`] renders separator lines the same way common test
//! runners do, so the slowest-test section sits naturally beside the
//! runner's own summary.

use std::io::Write;

/// Default terminal width used for separator lines
pub const DEFAULT_WIDTH: usize = 80;

/// End-of-session reporting channel
pub trait SummarySink {
    /// Write a separator line made of `sepchar`, with `title` centered
    fn write_sep(&mut self, sepchar: char, title: &str);

    /// Write one line of plain text
    fn write_line(&mut self, line: &str);
}

/// Best-effort [`SummarySink`] over any writer
#[derive(Debug)]
pub struct TerminalReporter<W: Write> {
    out: W,
    fullwidth: usize,
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_width(out, DEFAULT_WIDTH)
    }

    pub fn with_width(out: W, fullwidth: usize) -> Self {
        Self { out, fullwidth }
    }

    pub fn fullwidth(&self) -> usize {
        self.fullwidth
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write summary line: {}", e);
        }
    }
}

/// Build a separator line of `fullwidth` characters around `title`
pub fn separator_line(sepchar: char, title: &str, fullwidth: usize) -> String {
    if title.is_empty() {
        return sepchar.to_string().repeat(fullwidth);
    }

    let title_len = title.chars().count();
    let n = (fullwidth.saturating_sub(title_len + 2) / 2).max(1);
    let fill = sepchar.to_string().repeat(n);
    let mut line = format!("{} {} {}", fill, title, fill);

    if !sepchar.is_whitespace() && line.chars().count() < fullwidth {
        line.push(sepchar);
    }
    line
}

impl<W: Write> SummarySink for TerminalReporter<W> {
    fn write_sep(&mut self, sepchar: char, title: &str) {
        let line = separator_line(sepchar, title, self.fullwidth);
        self.emit(&line);
    }

    fn write_line(&mut self, line: &str) {
        self.emit(line);
    }
}
