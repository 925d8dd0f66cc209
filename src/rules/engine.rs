use std::fs;
use std::path::Path;
use tracing::trace;

use crate::error::AnalysisError;
use crate::rules::custom::PatternRule;
use crate::rules::types::ScanFinding;

/// Applies an ordered set of pattern rules to file content.
///
/// Every rule is evaluated on its own and contributes exactly one
/// [`ScanFinding`], in declaration order, whether it matched or not.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    rules: Vec<PatternRule>,
}

impl ContentScanner {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    pub fn scan(&self, content: &str) -> Vec<ScanFinding> {
        trace!(
            bytes = content.len(),
            rules = self.rules.len(),
            "Checking content against rules"
        );

        self.rules
            .iter()
            .map(|rule| match rule.first_match(content) {
                Some(text) => ScanFinding::matched(rule.label(), text),
                None => ScanFinding::unmatched(rule.label()),
            })
            .collect()
    }

    /// Decode `bytes` as UTF-8 and scan them. Content that is not text is
    /// reported as [`AnalysisError::Decode`], never scanned.
    pub fn scan_bytes(&self, path: &Path, bytes: &[u8]) -> Result<Vec<ScanFinding>, AnalysisError> {
        let content = std::str::from_utf8(bytes).map_err(|e| AnalysisError::Decode {
            path: path.to_path_buf(),
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.scan(content))
    }

    pub fn scan_file(&self, path: &Path) -> Result<Vec<ScanFinding>, AnalysisError> {
        let bytes = fs::read(path).map_err(|e| AnalysisError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.scan_bytes(path, &bytes)
    }
}
