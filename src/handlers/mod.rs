//! CLI command handlers.

mod config;
mod watch;

pub use config::{handle_init_config, resolve_config};
pub use watch::run_watch_mode;
