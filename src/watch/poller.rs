//! The polling change detector.

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn};

use super::tick::{Tick, TickSource};
use crate::config::WatchConfig;
use crate::discovery::{Snapshot, Snapshotter, display_key};
use crate::error::{AuditError, Result};
use crate::reporter::ReportSink;
use crate::rules::{
    AnalysisOutcome, ContentScanner, FileReport, RiskClassifier, WatchSummary, extension_of,
};

/// Where the poller is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Snapshotting,
    Diffing,
    Dispatching,
    Sleeping,
    Stopped,
}

/// Result of a single poll cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Paths that were new in this cycle, sorted.
    pub added: Vec<PathBuf>,
    /// How many of them were analyzed before cancellation, if any.
    pub analyzed: usize,
    pub cancelled: bool,
}

/// Owns the watch loop: snapshot, diff, dispatch, sleep.
///
/// The previous snapshot is the only state carried between cycles.
pub struct Poller {
    root: PathBuf,
    snapshotter: Snapshotter,
    classifier: RiskClassifier,
    scanner: ContentScanner,
    previous: Option<Snapshot>,
    state: PollState,
    summary: WatchSummary,
}

impl Poller {
    pub fn new(config: WatchConfig) -> Self {
        Self {
            snapshotter: Snapshotter::new(&config.watch_root),
            classifier: RiskClassifier::new(config.watched_extensions),
            scanner: ContentScanner::new(config.pattern_rules),
            root: config.watch_root,
            previous: None,
            state: PollState::Idle,
            summary: WatchSummary::default(),
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn summary(&self) -> &WatchSummary {
        &self.summary
    }

    fn transition(&mut self, next: PollState) {
        trace!(from = ?self.state, to = ?next, "Poller state change");
        self.state = next;
    }

    /// Create the root if it is missing and record the baseline snapshot.
    ///
    /// Files present at this point are never reported. On failure the poller
    /// is left `Stopped`.
    pub fn bootstrap(&mut self) -> Result<()> {
        let result = self.establish_baseline();
        if result.is_err() {
            self.transition(PollState::Stopped);
        }
        result
    }

    fn establish_baseline(&mut self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| AuditError::Bootstrap {
                path: self.root.clone(),
                source: e,
            })?;
            info!(path = %self.root.display(), "Created watch root");
        }

        let baseline = self.snapshotter.take()?;
        info!(
            path = %self.root.display(),
            files = baseline.len(),
            "Monitoring started"
        );
        self.previous = Some(baseline);
        Ok(())
    }

    /// Run one cycle: snapshot, diff against the previous snapshot, and
    /// analyze each added file. Bootstraps first if needed.
    ///
    /// `ticks` is consulted between files so a long batch can be cut short;
    /// files not reached are dropped, not analyzed later.
    pub fn poll_once<T, S>(&mut self, ticks: &T, sink: &mut S) -> Result<CycleOutcome>
    where
        T: TickSource + ?Sized,
        S: ReportSink + ?Sized,
    {
        if self.previous.is_none() {
            self.bootstrap()?;
        }

        self.transition(PollState::Snapshotting);
        let current = match self.snapshotter.take() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.transition(PollState::Stopped);
                return Err(e);
            }
        };

        self.transition(PollState::Diffing);
        let previous = self.previous.take().unwrap_or_default();
        let added = current.added_since(&previous);
        if !added.is_empty() {
            debug!(
                before = previous.len(),
                now = current.len(),
                added = added.len(),
                "Directory changed"
            );
        }
        self.previous = Some(current);

        self.transition(PollState::Dispatching);
        let mut analyzed = 0;
        let mut cancelled = false;
        for path in &added {
            if analyzed > 0 && ticks.is_cancelled() {
                cancelled = true;
                warn!(
                    remaining = added.len() - analyzed,
                    "Shutdown requested, skipping remaining files"
                );
                break;
            }
            let report = self.analyze(path);
            self.summary.record(&report);
            sink.record(&report);
            analyzed += 1;
        }

        self.summary.cycles += 1;
        self.transition(PollState::Idle);
        Ok(CycleOutcome {
            added,
            analyzed,
            cancelled,
        })
    }

    /// Classify and scan one file, given its path relative to the root.
    ///
    /// Read and decode failures become part of the report.
    pub fn analyze(&self, relative: &Path) -> FileReport {
        let full_path = self.root.join(relative);
        let display_path = display_key(relative);
        let extension = extension_of(relative);
        let risk = self.classifier.classify(&extension);

        info!(file = %display_path, risk = risk.as_str(), "New file detected");

        let outcome = match self.scanner.scan_file(&full_path) {
            Ok(findings) => {
                for finding in findings.iter().filter(|f| f.matched) {
                    warn!(
                        file = %display_path,
                        rule = %finding.label,
                        preview = %finding.preview,
                        "Sensitive pattern detected"
                    );
                }
                AnalysisOutcome::Scanned { findings }
            }
            Err(e) => {
                warn!(file = %display_path, error = %e, "Scan skipped");
                e.into()
            }
        };

        FileReport {
            path: display_path,
            extension,
            risk,
            analyzed_at: Utc::now().to_rfc3339(),
            outcome,
        }
    }

    /// Poll until the tick source says stop.
    ///
    /// Returns the session summary on a clean stop. The only error after
    /// bootstrap is losing access to the watch root.
    pub fn run<T, S>(&mut self, ticks: &mut T, sink: &mut S) -> Result<WatchSummary>
    where
        T: TickSource + ?Sized,
        S: ReportSink + ?Sized,
    {
        self.bootstrap()?;

        loop {
            if let Err(e) = self.poll_once(&*ticks, sink) {
                error!(error = %e, "Watch loop terminated");
                return Err(e);
            }

            self.transition(PollState::Sleeping);
            if ticks.wait() == Tick::Stop {
                break;
            }
            self.transition(PollState::Idle);
        }

        self.transition(PollState::Stopped);
        info!(
            cycles = self.summary.cycles,
            analyzed = self.summary.analyzed,
            "Monitoring stopped"
        );
        sink.finish(&self.summary);
        Ok(self.summary.clone())
    }
}
