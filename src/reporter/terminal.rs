use crate::reporter::Reporter;
use crate::rules::{AnalysisOutcome, FileReport, RiskTag, ScanFinding, WatchSummary};
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn risk_label(&self, risk: &RiskTag, extension: &str) -> colored::ColoredString {
        let ext = if extension.is_empty() {
            "no extension"
        } else {
            extension
        };
        let label = format!("[{} {}]", risk, ext);
        match risk {
            RiskTag::Watched => label.yellow().bold(),
            RiskTag::Unwatched => label.dimmed(),
        }
    }

    fn format_finding(&self, finding: &ScanFinding) -> Option<String> {
        if finding.matched {
            // Previews can span lines (block comments); keep each finding on one.
            let preview = finding.preview.replace('\n', "\\n");
            Some(format!(
                "  {} {}: {}",
                "[MATCH]".red().bold(),
                finding.label,
                preview
            ))
        } else if self.verbose {
            Some(format!("  {} {}: no match", "[ -- ]".dimmed(), finding.label))
        } else {
            None
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &FileReport) -> String {
        let mut output = format!(
            "{} {} {}\n",
            "[NEW]".cyan().bold(),
            report.path,
            self.risk_label(&report.risk, &report.extension)
        );

        match &report.outcome {
            AnalysisOutcome::Scanned { findings } => {
                for line in findings.iter().filter_map(|f| self.format_finding(f)) {
                    output.push_str(&line);
                    output.push('\n');
                }
                if !report.has_matches() {
                    output.push_str(&format!(
                        "  {}\n",
                        "No sensitive information detected".green()
                    ));
                }
            }
            AnalysisOutcome::Failed { kind, message } => {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    "[ERROR]".red().bold(),
                    kind.as_str(),
                    message
                ));
                output.push_str(&format!("  {}\n", "Scan skipped".yellow()));
            }
        }

        output.trim_end().to_string()
    }

    fn summary(&self, summary: &WatchSummary) -> String {
        format!(
            "{}\n  Cycles: {}\n  Files analyzed: {}\n  Watched-risk files: {}\n  Files with matches: {}\n  Failed analyses: {}",
            "Monitoring stopped.".bold(),
            summary.cycles,
            summary.analyzed,
            summary.watched,
            summary.with_matches,
            summary.failed
        )
    }
}
