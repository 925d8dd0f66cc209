use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "drop-audit",
    version,
    about = "Watch a directory for new files and scan them for sensitive content",
    long_about = "drop-audit polls a directory tree, reports every newly added file with its extension risk, and scans its text for comments, email addresses, SQL fragments, or your own patterns."
)]
pub struct Cli {
    /// Directory to watch (overrides watch_root from the config file)
    pub root: Option<PathBuf>,

    /// Configuration file (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seconds between polls
    #[arg(short, long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Watched-risk extension, repeatable (replaces the configured set)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Stop after this many poll cycles
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// Verbose output: list unmatched rules and enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a configuration template (to PATH, or .drop-audit.yaml in PATH if it is a directory)
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = ".")]
    pub init: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref root) = self.root {
            config.watch_root = root.clone();
        }
        if let Some(interval) = self.interval {
            config.poll_interval_seconds = interval;
        }
        if !self.extensions.is_empty() {
            config.watched_extensions = self
                .extensions
                .iter()
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.clone()
                    } else {
                        format!(".{}", ext)
                    }
                })
                .collect();
        }
    }
}
