//! The process-wide logger and its configuration surface.

use std::fmt;
use std::sync::{Mutex, OnceLock};

use crate::level::Severity;
use crate::logger::Logger;

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn global() -> &'static Mutex<Logger> {
    LOGGER.get_or_init(|| Mutex::new(Logger::new()))
}

/// Overwrites the process-wide severity threshold.
///
/// Takes effect on the next logging call. No validation, no errors.
pub fn set_log_level(level: Severity) {
    if let Ok(mut logger) = global().lock() {
        logger.set_level(level);
    }
}

/// Routes all subsequent process-wide output to `callback`, rendered through
/// the caller-supplied `scratch` buffer.
///
/// See [`Logger::register_sink`] for the delivery contract. Registration is
/// one-way: the console is never used again, though a later registration
/// replaces the sink.
pub fn register_custom_logger<F>(callback: F, scratch: Vec<u8>)
where
    F: FnMut(&[u8]) + Send + 'static,
{
    if let Ok(mut logger) = global().lock() {
        logger.register_sink(callback, scratch);
    }
}

/// Emits one message through the process-wide logger.
///
/// The lock spans the whole render-and-deliver sequence, so the three parts
/// of one call are never interleaved with another thread's. A poisoned lock
/// drops the message; nothing here panics or reports failure.
pub fn log(tag: &str, level: Severity, args: fmt::Arguments<'_>) {
    if let Ok(mut logger) = global().lock() {
        logger.log(tag, level, args);
    }
}

/// Threshold of the process-wide logger, for adapters that gate before
/// forwarding.
pub(crate) fn threshold() -> Severity {
    global().lock().map_or(Severity::Verbose, |logger| logger.level())
}
