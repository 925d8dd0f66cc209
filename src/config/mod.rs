//! Configuration file support for drop-audit.
//!
//! Configuration is read once at startup from `.drop-audit.{yaml,yml,json,toml}`
//! or the global config directory, merged with CLI flags, and validated into
//! an immutable [`WatchConfig`].

mod error;
mod loading;
mod template;
mod types;
mod validation;

pub use error::ConfigError;
pub use loading::CONFIG_FILE_NAMES;
pub use types::{
    Config, DEFAULT_POLL_INTERVAL_SECONDS, DEFAULT_WATCH_ROOT, PatternRuleConfig, WatchConfig,
};
