//! Logging initialization for buzz_app.
//!
//! Logs go to `./buzz.log` by default; the terminal is reserved for the
//! UI. `BUZZ_LOG` can redirect them to stderr, or to both.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./buzz.log";

/// Destination for log output, selected with the `BUZZ_LOG` variable.
#[derive(Clone, Copy)]
pub enum LogDestination {
    /// Write to ./buzz.log in the current directory.
    File,
    /// Write to stderr, interleaved with the UI.
    Terminal,
    /// Write to both file and stderr.
    Both,
}

/// Installs the global logger. A missing log file degrades to a warning
/// on stderr rather than an error.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(LOG_PATH) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("warning: could not create {LOG_PATH}: {err}"),
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
