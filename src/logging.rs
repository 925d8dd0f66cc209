//! Tracing setup for the drop-audit binary.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "drop_audit=info";
const VERBOSE_LOG_FILTER: &str = "drop_audit=debug";

/// Install a stderr subscriber. `RUST_LOG` wins over `verbose` when set.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
