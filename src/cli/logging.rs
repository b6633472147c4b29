//! Logging utilities for CLI output

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Most verbose `tracing` level emitted at this CLI level
    pub fn tracing_level(self) -> Level {
        match self {
            LogLevel::Quiet => Level::ERROR,
            LogLevel::Normal => Level::WARN,
            LogLevel::Verbose => Level::DEBUG,
        }
    }
}

/// Install a stderr `tracing` subscriber so stdout stays machine readable.
pub fn init_tracing(level: LogLevel) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level.tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install log subscriber: {e}");
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}
