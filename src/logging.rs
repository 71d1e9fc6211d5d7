//! Logger initialisation
//!
//! The library logs through the `log` facade; the binary installs an
//! `env_logger` backend here.

use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Install the global logger
///
/// Logs at `Info` by default (`Debug` when `debug_enabled`), and `RUST_LOG`
/// overrides both. With `log_file` the output is appended to that file
/// instead of stderr, which keeps log lines out of the full-screen interface.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
pub fn init_logger(debug_enabled: bool, log_file: Option<&Path>) -> std::io::Result<()> {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if let Some(path) = log_file {
        let file = File::options().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests, embedding applications)
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }

    Ok(())
}
