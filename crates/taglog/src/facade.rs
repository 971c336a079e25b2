//! `log` facade adapter.
//!
//! The inverse of a logging backend: [`LogFacade`] installs as the global
//! [`log`] logger and forwards every facade record into the taglog
//! dispatcher, so code written against `log::info!` and friends shares the
//! same gate, framing, and sink as native callers. The record target becomes
//! the tag.

use log::{Level, Log, Metadata, Record, SetLoggerError};

use crate::level::Severity;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Warn => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
            Level::Trace => Self::Verbose,
        }
    }
}

/// Forwards `log` records into the process-wide logger.
pub struct LogFacade;

impl LogFacade {
    /// Installs as the global `log` logger and aligns the taglog threshold
    /// with `min_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn init(min_level: Level) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self))?;
        log::set_max_level(min_level.to_level_filter());
        crate::set_log_level(min_level.into());
        Ok(())
    }

    /// Installs as the global logger, ignoring an already-installed one.
    pub fn try_init(min_level: Level) {
        let _ = Self::init(min_level);
    }
}

impl Log for LogFacade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Severity::from(metadata.level()) <= crate::global::threshold()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        crate::log(record.target(), record.level().into(), *record.args());
    }

    fn flush(&self) {}
}
