//! Startup validation. Every configuration problem surfaces here, before the
//! watch loop begins.

use std::time::Duration;

use super::error::ConfigError;
use super::types::{Config, WatchConfig};
use crate::rules::PatternRule;

impl Config {
    /// Check every field and compile the pattern rules.
    pub fn validate(&self) -> Result<WatchConfig, ConfigError> {
        if self.poll_interval_seconds == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if let Some(bad) = self
            .watched_extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(ConfigError::InvalidExtension(bad.clone()));
        }

        if self.pattern_rules.is_empty() {
            return Err(ConfigError::NoRules);
        }

        let pattern_rules = self
            .pattern_rules
            .iter()
            .map(PatternRule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WatchConfig {
            watch_root: self.watch_root.clone(),
            watched_extensions: self.watched_extensions.clone(),
            poll_interval: Duration::from_secs(self.poll_interval_seconds),
            pattern_rules,
        })
    }
}
