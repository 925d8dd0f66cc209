//! Watch mode handler.

use std::io;
use std::process::ExitCode;
use tracing::{error, info, warn};

use super::config::resolve_config;
use crate::error::{AuditError, Result};
use crate::reporter::{Reporter, WriterSink, json::JsonReporter, terminal::TerminalReporter};
use crate::rules::WatchSummary;
use crate::watch::{IntervalTicker, Poller, ShutdownFlag};
use crate::{Cli, OutputFormat};

/// Run the watch loop until Ctrl+C, `--cycles`, or a fatal error.
pub fn run_watch_mode(cli: &Cli) -> ExitCode {
    match watch(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(e, AuditError::Config(_)) {
                error!(error = %e, "Invalid configuration");
            }
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn watch(cli: &Cli) -> Result<WatchSummary> {
    let watch_config = resolve_config(cli)?.validate()?;

    let shutdown = ShutdownFlag::new();
    let handler_flag = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received Ctrl+C, stopping after the current cycle...");
        handler_flag.request();
    }) {
        warn!(error = %e, "Failed to install Ctrl+C handler");
    }

    let mut ticker = IntervalTicker::new(watch_config.poll_interval, shutdown);
    if let Some(cycles) = cli.cycles {
        ticker = ticker.with_cycle_limit(cycles);
    }

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(cli.verbose)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };
    let mut sink = WriterSink::new(reporter, io::stdout());

    if cli.format == OutputFormat::Terminal {
        println!(
            "Monitoring {} every {}s",
            watch_config.watch_root.display(),
            watch_config.poll_interval.as_secs()
        );
        println!("Press Ctrl+C to stop\n");
    }

    Poller::new(watch_config).run(&mut ticker, &mut sink)
}
