// src/log.rs
// Debug log for the binary: `.store/debug.log`, appended, off by default.
// The library only emits `tracing` events; nothing is recorded unless a
// subscriber is installed here.

use std::fs::OpenOptions;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::config::consts::{ LOG_FILE, STORE_DIR };

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the file subscriber. Keep the guard alive until exit or buffered
/// lines are lost. `None` when logging is off.
pub fn init(level: LogLevel) -> std::io::Result<Option<WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let path = log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .init();

    tracing::info!("m365_catalog {} log level {:?}", env!("CARGO_PKG_VERSION"), level);
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_installs_nothing() {
        assert!(init(LogLevel::Off).unwrap().is_none());
        assert_eq!(log_path(), PathBuf::from(".store").join("debug.log"));
    }
}
