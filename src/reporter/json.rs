use serde_json::json;

use crate::reporter::Reporter;
use crate::rules::{FileReport, WatchSummary};

/// One JSON object per line, suitable for log shippers.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, report: &FileReport) -> String {
        serde_json::to_string(report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }

    fn summary(&self, summary: &WatchSummary) -> String {
        json!({ "summary": summary }).to_string()
    }
}
