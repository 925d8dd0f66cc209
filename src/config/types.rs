//! Configuration type definitions.

use crate::rules::builtin;
use crate::rules::{MatchMode, PatternRule};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_WATCH_ROOT: &str = "./monitor_directory";
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 2;

/// Configuration as written in a file or assembled from CLI flags.
///
/// Nothing here is trusted until [`Config::validate`] turns it into a
/// [`WatchConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory subtree to observe. Created if absent.
    pub watch_root: PathBuf,
    /// Extensions (with leading `.`) classified as watched-risk.
    pub watched_extensions: Vec<String>,
    /// Delay between poll cycles.
    pub poll_interval_seconds: u64,
    /// Ordered rules applied to the content of every added file.
    pub pattern_rules: Vec<PatternRuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_root: PathBuf::from(DEFAULT_WATCH_ROOT),
            watched_extensions: builtin::WATCHED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            poll_interval_seconds: DEFAULT_POLL_INTERVAL_SECONDS,
            pattern_rules: builtin::rule_configs(),
        }
    }
}

/// A pattern rule before its regex has been compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRuleConfig {
    pub label: String,
    pub pattern: String,
    #[serde(default)]
    pub mode: MatchMode,
}

impl PatternRuleConfig {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
            mode: MatchMode::default(),
        }
    }
}

/// Validated, immutable configuration handed to the poller at construction.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub watch_root: PathBuf,
    pub watched_extensions: Vec<String>,
    pub poll_interval: Duration,
    pub pattern_rules: Vec<PatternRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builtin_settings() {
        let config = Config::default();
        assert_eq!(config.watch_root, PathBuf::from("./monitor_directory"));
        assert_eq!(config.watched_extensions, vec![".py", ".js", ".class"]);
        assert_eq!(config.poll_interval_seconds, 2);
        let labels: Vec<_> = config.pattern_rules.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Comments", "Email", "SQL"]);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("poll_interval_seconds: 5\n").unwrap();
        assert_eq!(config.poll_interval_seconds, 5);
        assert_eq!(config.pattern_rules.len(), 3);
        assert_eq!(config.watched_extensions.len(), 3);
    }

    #[test]
    fn test_rule_mode_defaults_when_omitted() {
        let rule: PatternRuleConfig =
            serde_yaml::from_str("label: Token\npattern: 'token=\\w+'\n").unwrap();
        assert_eq!(rule.mode, MatchMode::CaseInsensitiveMultiline);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<PatternRuleConfig, _> =
            serde_yaml::from_str("label: Token\npattern: x\nmode: dotall\n");
        assert!(result.is_err());
    }
}
