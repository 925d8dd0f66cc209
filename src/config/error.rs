//! Configuration error types.

use crate::rules::RuleError;

/// Configuration loading and validation error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {path}: {source}")]
    ParseYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON config {path}: {source}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML config {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported config format for {0}: .{1}")]
    UnsupportedFormat(String, String),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("No pattern rules configured")]
    NoRules,

    #[error("Invalid watched extension '{0}': expected a leading '.' (e.g. .py)")]
    InvalidExtension(String),

    #[error("Poll interval must be at least one second")]
    ZeroInterval,

    #[error("Configuration file already exists: {0}")]
    AlreadyExists(String),

    #[error("Failed to write configuration file {path}: {source}")]
    WriteTemplate {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
