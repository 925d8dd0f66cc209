pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod reporter;
pub mod rules;
pub mod watch;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError, PatternRuleConfig, WatchConfig};
pub use discovery::{Snapshot, Snapshotter};
pub use error::{AnalysisError, AuditError, Result};
pub use reporter::{
    ReportSink, Reporter, WriterSink, json::JsonReporter, terminal::TerminalReporter,
};
pub use rules::{
    AnalysisOutcome, ContentScanner, FailureKind, FileReport, MatchMode, PatternRule,
    RiskClassifier, RiskTag, RuleError, ScanFinding, WatchSummary,
};
pub use watch::{CycleOutcome, IntervalTicker, PollState, Poller, ShutdownFlag, Tick, TickSource};
