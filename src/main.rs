use clap::Parser;
use drop_audit::{
    Cli,
    handlers::{handle_init_config, run_watch_mode},
    logging::init_logging,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle config initialization
    if let Some(ref path) = cli.init {
        return handle_init_config(path);
    }

    run_watch_mode(&cli)
}
