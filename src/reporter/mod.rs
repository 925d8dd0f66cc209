pub mod json;
pub mod terminal;

use std::io::Write;
use tracing::warn;

use crate::rules::{FileReport, WatchSummary};

/// Formats reports for output.
pub trait Reporter {
    fn report(&self, report: &FileReport) -> String;

    fn summary(&self, summary: &WatchSummary) -> String;
}

/// Consumes per-file results as the poller produces them.
pub trait ReportSink {
    fn record(&mut self, report: &FileReport);

    /// Called once when the watch loop stops.
    fn finish(&mut self, _summary: &WatchSummary) {}
}

/// Collects reports in memory.
impl ReportSink for Vec<FileReport> {
    fn record(&mut self, report: &FileReport) {
        self.push(report.clone());
    }
}

/// Formats each report and writes it to `W`.
pub struct WriterSink<W: Write> {
    reporter: Box<dyn Reporter>,
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(reporter: Box<dyn Reporter>, writer: W) -> Self {
        Self { reporter, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        let result = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write report");
        }
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn record(&mut self, report: &FileReport) {
        let text = self.reporter.report(report);
        self.emit(&text);
    }

    fn finish(&mut self, summary: &WatchSummary) {
        let text = self.reporter.summary(summary);
        self.emit(&text);
    }
}
