#[cfg(test)]
pub mod fixtures {
    use std::path::Path;

    use crate::config::Config;
    use crate::rules::{
        AnalysisOutcome, ContentScanner, FailureKind, FileReport, RiskTag, ScanFinding,
        extension_of,
    };

    pub fn builtin_scanner() -> ContentScanner {
        let config = Config::default().validate().unwrap();
        ContentScanner::new(config.pattern_rules)
    }

    /// Build a scanned report; `None` marks a rule that did not match.
    pub fn create_report(path: &str, risk: RiskTag, findings: &[(&str, Option<&str>)]) -> FileReport {
        let findings = findings
            .iter()
            .map(|(label, preview)| match preview {
                Some(text) => ScanFinding::matched(label, text),
                None => ScanFinding::unmatched(label),
            })
            .collect();

        FileReport {
            path: path.to_string(),
            extension: extension_of(Path::new(path)),
            risk,
            analyzed_at: "2026-01-25T12:00:00+00:00".to_string(),
            outcome: AnalysisOutcome::Scanned { findings },
        }
    }

    pub fn create_failed_report(path: &str, kind: FailureKind) -> FileReport {
        FileReport {
            path: path.to_string(),
            extension: extension_of(Path::new(path)),
            risk: RiskTag::Unwatched,
            analyzed_at: "2026-01-25T12:00:00+00:00".to_string(),
            outcome: AnalysisOutcome::Failed {
                kind,
                message: format!("test failure for {}", path),
            },
        }
    }
}
