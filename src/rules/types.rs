use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Risk classification derived from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTag {
    Watched,
    Unwatched,
}

impl RiskTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTag::Watched => "watched",
            RiskTag::Unwatched => "unwatched",
        }
    }

    pub fn is_watched(&self) -> bool {
        matches!(self, RiskTag::Watched)
    }
}

impl std::fmt::Display for RiskTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// How a pattern rule is matched against content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// `(?im)`: case-insensitive, `^`/`$` match at line boundaries.
    #[default]
    CaseInsensitiveMultiline,
}

/// Evidence produced by one rule for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFinding {
    pub label: String,
    /// First match, truncated to [`PREVIEW_MAX_CHARS`]. Empty when unmatched.
    pub preview: String,
    pub matched: bool,
}

pub const PREVIEW_MAX_CHARS: usize = 50;

impl ScanFinding {
    pub fn matched(label: &str, first_match: &str) -> Self {
        Self {
            label: label.to_string(),
            preview: first_match.chars().take(PREVIEW_MAX_CHARS).collect(),
            matched: true,
        }
    }

    pub fn unmatched(label: &str) -> Self {
        Self {
            label: label.to_string(),
            preview: String::new(),
            matched: false,
        }
    }
}

/// Recoverable failure category, kept alongside the message so consumers
/// can branch on it without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ReadError,
    DecodeError,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ReadError => "read_error",
            FailureKind::DecodeError => "decode_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Scanned { findings: Vec<ScanFinding> },
    Failed { kind: FailureKind, message: String },
}

impl From<AnalysisError> for AnalysisOutcome {
    fn from(err: AnalysisError) -> Self {
        let kind = match err {
            AnalysisError::Read { .. } => FailureKind::ReadError,
            AnalysisError::Decode { .. } => FailureKind::DecodeError,
        };
        AnalysisOutcome::Failed {
            kind,
            message: err.to_string(),
        }
    }
}

/// Everything known about one added file after classification and scanning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to the watch root, `/`-separated.
    pub path: String,
    /// Extension including the leading `.`, empty when the file has none.
    pub extension: String,
    pub risk: RiskTag,
    pub analyzed_at: String,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

impl FileReport {
    pub fn findings(&self) -> &[ScanFinding] {
        match &self.outcome {
            AnalysisOutcome::Scanned { findings } => findings,
            AnalysisOutcome::Failed { .. } => &[],
        }
    }

    /// Whether at least one rule matched. False for failed analyses.
    pub fn has_matches(&self) -> bool {
        self.findings().iter().any(|f| f.matched)
    }

    pub fn matched_labels(&self) -> Vec<&str> {
        self.findings()
            .iter()
            .filter(|f| f.matched)
            .map(|f| f.label.as_str())
            .collect()
    }

    pub fn failure(&self) -> Option<FailureKind> {
        match &self.outcome {
            AnalysisOutcome::Failed { kind, .. } => Some(*kind),
            AnalysisOutcome::Scanned { .. } => None,
        }
    }
}

/// Running totals for one watch session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchSummary {
    pub cycles: u64,
    pub analyzed: usize,
    pub watched: usize,
    pub with_matches: usize,
    pub failed: usize,
}

impl WatchSummary {
    pub fn record(&mut self, report: &FileReport) {
        self.analyzed += 1;
        if report.risk.is_watched() {
            self.watched += 1;
        }
        if report.has_matches() {
            self.with_matches += 1;
        }
        if report.failure().is_some() {
            self.failed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{create_failed_report, create_report};
    use std::path::PathBuf;

    #[test]
    fn test_risk_tag_as_str() {
        assert_eq!(RiskTag::Watched.as_str(), "watched");
        assert_eq!(RiskTag::Unwatched.as_str(), "unwatched");
    }

    #[test]
    fn test_risk_tag_display() {
        assert_eq!(format!("{}", RiskTag::Watched), "WATCHED");
        assert_eq!(format!("{}", RiskTag::Unwatched), "UNWATCHED");
    }

    #[test]
    fn test_preview_truncated_to_50_chars() {
        let long = "x".repeat(80);
        let finding = ScanFinding::matched("Comments", &long);
        assert_eq!(finding.preview.chars().count(), 50);
        assert!(finding.matched);
    }

    #[test]
    fn test_preview_truncation_respects_char_boundaries() {
        let text = "é".repeat(60);
        let finding = ScanFinding::matched("Comments", &text);
        assert_eq!(finding.preview, "é".repeat(50));
    }

    #[test]
    fn test_outcome_from_decode_error() {
        let outcome: AnalysisOutcome = AnalysisError::Decode {
            path: PathBuf::from("a.bin"),
            valid_up_to: 0,
        }
        .into();
        assert!(matches!(
            outcome,
            AnalysisOutcome::Failed {
                kind: FailureKind::DecodeError,
                ..
            }
        ));
    }

    #[test]
    fn test_report_distinguishes_no_matches_from_failure() {
        let clean = create_report("notes.txt", RiskTag::Unwatched, &[("Email", None)]);
        assert!(!clean.has_matches());
        assert_eq!(clean.failure(), None);
        assert_eq!(clean.findings().len(), 1);

        let failed = create_failed_report("blob.bin", FailureKind::DecodeError);
        assert!(!failed.has_matches());
        assert_eq!(failed.failure(), Some(FailureKind::DecodeError));
        assert!(failed.findings().is_empty());
    }

    #[test]
    fn test_report_serializes_flat_outcome() {
        let report = create_report("leak.py", RiskTag::Watched, &[("SQL", Some("SELECT "))]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "scanned");
        assert_eq!(value["risk"], "watched");
        assert_eq!(value["findings"][0]["label"], "SQL");
        assert_eq!(value["findings"][0]["matched"], true);

        let failed = create_failed_report("gone.py", FailureKind::ReadError);
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["kind"], "read_error");
    }

    #[test]
    fn test_summary_record() {
        let mut summary = WatchSummary::default();
        summary.record(&create_report(
            "leak.py",
            RiskTag::Watched,
            &[("SQL", Some("SELECT "))],
        ));
        summary.record(&create_report("a.txt", RiskTag::Unwatched, &[("SQL", None)]));
        summary.record(&create_failed_report("b.bin", FailureKind::DecodeError));

        assert_eq!(summary.analyzed, 3);
        assert_eq!(summary.watched, 1);
        assert_eq!(summary.with_matches, 1);
        assert_eq!(summary.failed, 1);
    }
}
