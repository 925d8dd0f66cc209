//! Configuration template generation.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::types::Config;

impl Config {
    /// Generate a YAML configuration template with comments.
    pub fn generate_template() -> String {
        r#"# drop-audit Configuration File
# Place this file as .drop-audit.yaml in the directory you start drop-audit from

# =============================================================================
# WATCH CONFIGURATION
# =============================================================================

# Directory subtree to observe. Created on startup if it does not exist.
# Files already present at startup are treated as the baseline and not reported.
watch_root: ./monitor_directory

# Seconds between two directory snapshots.
poll_interval_seconds: 2

# Extensions tagged as watched-risk. Each entry needs its leading dot.
watched_extensions:
  - .py
  - .js
  - .class

# =============================================================================
# PATTERN RULES
# =============================================================================
# Every rule runs against the full text of each newly added file.
# Matching is case-insensitive and multiline; rules are independent, so one
# file may trigger several. Invalid patterns stop drop-audit at startup.

pattern_rules:
  - label: Comments
    pattern: '(#.*)|(//.*)|(/\*[\s\S]*?\*/)'
  - label: Email
    pattern: '[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}'
  - label: SQL
    pattern: '\b(SELECT|INSERT|UPDATE|DELETE|DROP|ALTER|CREATE|UNION|JOIN|WHERE|FROM)\s+'
  # - label: AWS access key
  #   pattern: 'AKIA[0-9A-Z]{16}'
  #   mode: case_insensitive_multiline
"#
        .to_string()
    }

    /// Write the template to `path`, or to `.drop-audit.yaml` inside it when
    /// `path` is a directory. Refuses to overwrite an existing file.
    pub fn write_template(path: &Path) -> Result<PathBuf, ConfigError> {
        let output_path = if path.is_dir() {
            path.join(".drop-audit.yaml")
        } else {
            path.to_path_buf()
        };

        if output_path.exists() {
            return Err(ConfigError::AlreadyExists(
                output_path.display().to_string(),
            ));
        }

        fs::write(&output_path, Self::generate_template()).map_err(|e| {
            ConfigError::WriteTemplate {
                path: output_path.display().to_string(),
                source: e,
            }
        })?;

        Ok(output_path)
    }
}
