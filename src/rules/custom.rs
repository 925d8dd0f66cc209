use regex::{Regex, RegexBuilder};

use crate::config::PatternRuleConfig;
use crate::rules::types::MatchMode;

/// A named, compiled pattern rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    label: String,
    regex: Regex,
    mode: MatchMode,
}

/// Error type for pattern rule compilation.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid regex pattern '{pattern}' in rule {label}: {source}")]
    InvalidPattern {
        label: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern rule '{pattern}' has an empty label")]
    EmptyLabel { pattern: String },
}

impl PatternRule {
    /// Compile a configured rule.
    pub fn compile(config: &PatternRuleConfig) -> Result<Self, RuleError> {
        if config.label.trim().is_empty() {
            return Err(RuleError::EmptyLabel {
                pattern: config.pattern.clone(),
            });
        }

        let mut builder = RegexBuilder::new(&config.pattern);
        match config.mode {
            MatchMode::CaseInsensitiveMultiline => {
                builder.case_insensitive(true).multi_line(true);
            }
        }

        let regex = builder.build().map_err(|e| RuleError::InvalidPattern {
            label: config.label.clone(),
            pattern: config.pattern.clone(),
            source: e,
        })?;

        Ok(Self {
            label: config.label.clone(),
            regex,
            mode: config.mode,
        })
    }

    pub fn new(label: &str, pattern: &str) -> Result<Self, RuleError> {
        Self::compile(&PatternRuleConfig::new(label, pattern))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Text of the leftmost match, if any.
    pub fn first_match<'t>(&self, content: &'t str) -> Option<&'t str> {
        self.regex.find(content).map(|m| m.as_str())
    }
}
