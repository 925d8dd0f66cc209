//! Configuration-related handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::Cli;
use crate::config::{Config, ConfigError};

/// Handle --init command.
pub fn handle_init_config(path: &Path) -> ExitCode {
    match Config::write_template(path) {
        Ok(written) => {
            info!(path = %written.display(), "Wrote configuration template");
            println!(
                "Created configuration file template at {}",
                written.display()
            );
            println!("\nYou can customize this file to:");
            println!("  - Choose the directory to watch and the poll interval");
            println!("  - Change which extensions are flagged as watched-risk");
            println!("  - Add your own pattern rules");
            ExitCode::SUCCESS
        }
        Err(ConfigError::AlreadyExists(existing)) => {
            eprintln!("Error: Configuration file already exists at {}", existing);
            eprintln!("Remove it first or specify a different path.");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Resolve the effective configuration: explicit file, else discovered file
/// or defaults, then CLI overrides.
pub fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match cli.config {
        Some(ref path) => Config::from_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load(Some(&cwd))
        }
    };
    cli.apply_overrides(&mut config);
    debug!(?config, "Resolved configuration");
    Ok(config)
}
