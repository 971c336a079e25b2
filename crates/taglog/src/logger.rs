//! The level gate and dual-mode dispatcher.

use std::fmt::{self, Write as _};
use std::io;
use std::time::Instant;

use crate::format::{self, IoAdapter};
use crate::level::Severity;
use crate::sink::CustomSink;

/// Where accepted messages go.
enum Output {
    /// Direct, unbounded writes to a console stream.
    Console(Box<dyn io::Write + Send>),
    /// Bounded rendering into a registered sink.
    Custom(CustomSink),
}

/// A self-contained logging context: threshold, output mode, and the epoch
/// its timestamps count from.
///
/// The process-wide surface ([`crate::set_log_level`],
/// [`crate::register_custom_logger`], [`crate::log`]) wraps one of these;
/// tests and embedders can hold isolated instances instead of sharing the
/// global one.
pub struct Logger {
    threshold: Severity,
    output: Output,
    epoch: Instant,
}

impl Logger {
    /// Context with the default threshold ([`Severity::Verbose`], everything
    /// passes), writing console output to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Context writing console output to `writer` instead of stdout.
    #[must_use]
    pub fn with_writer<W: io::Write + Send + 'static>(writer: W) -> Self {
        Self {
            threshold: Severity::Verbose,
            output: Output::Console(Box::new(writer)),
            epoch: Instant::now(),
        }
    }

    /// Active minimum-severity threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.threshold
    }

    /// Overwrites the threshold. Takes effect on the next [`log`](Self::log)
    /// call.
    pub fn set_level(&mut self, level: Severity) {
        self.threshold = level;
    }

    /// Switches to custom-sink mode, replacing any previously registered
    /// sink.
    ///
    /// `scratch` is the reusable render buffer; its length is the capacity
    /// every framing part is truncated to. A zero-length buffer is accepted
    /// and suppresses every delivery. There is no way back to console mode,
    /// only replacement by a later registration.
    pub fn register_sink<F>(&mut self, callback: F, scratch: Vec<u8>)
    where
        F: FnMut(&[u8]) + Send + 'static,
    {
        self.output = Output::Custom(CustomSink::new(Box::new(callback), scratch));
    }

    /// Emits one message, or silently drops it.
    ///
    /// Dropped when `tag` is empty or `severity` ranks below the threshold.
    /// Never panics and never reports failure: logging must not change the
    /// caller's control flow.
    pub fn log(&mut self, tag: &str, severity: Severity, args: fmt::Arguments<'_>) {
        if tag.is_empty() || severity > self.threshold {
            return;
        }

        let elapsed = self.epoch.elapsed().as_secs_f64();
        match &mut self.output {
            Output::Console(writer) => {
                let mut out = IoAdapter(writer.as_mut());
                let _ = format::write_prefix(&mut out, severity, elapsed, tag);
                let _ = out.write_fmt(args);
                let _ = format::write_suffix(&mut out);
            }
            Output::Custom(sink) => sink.deliver(severity, elapsed, tag, args),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Captures console writes for assertions, in place of stdout.
    #[derive(Clone, Default)]
    struct SharedWriter(Arc<Mutex<Vec<u8>>>);

    impl SharedWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_threshold_passes_every_severity() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());
        for severity in Severity::ALL {
            logger.log("t", severity, format_args!("m"));
        }
        assert_eq!(writer.contents().lines().count(), 5);
    }

    #[test]
    fn threshold_gates_by_rank() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());
        logger.set_level(Severity::Info);

        logger.log("t", Severity::Warning, format_args!("kept"));
        logger.log("t", Severity::Debug, format_args!("dropped"));

        let out = writer.contents();
        assert!(out.contains("kept"));
        assert!(!out.contains("dropped"));
    }

    #[test]
    fn error_threshold_drops_verbose() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());
        logger.set_level(Severity::Error);
        logger.log("t", Severity::Verbose, format_args!("m"));
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn empty_tag_is_dropped() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());
        logger.log("", Severity::Error, format_args!("m"));
        assert!(writer.contents().is_empty());
    }

    #[test]
    fn console_line_carries_all_three_parts() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());
        logger.log("net", Severity::Error, format_args!("down"));

        let out = writer.contents();
        assert!(out.starts_with("\u{1b}[0;31m["));
        assert!(out.contains("] net: down"));
        assert!(out.ends_with("\u{1b}[0m\n"));
    }

    #[test]
    fn empty_body_still_frames_the_line() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());
        logger.log("t", Severity::Info, format_args!(""));

        let out = writer.contents();
        assert!(out.contains("] t: \u{1b}[0m\n"));
    }

    #[test]
    fn registering_a_sink_leaves_the_console_untouched() {
        let writer = SharedWriter::default();
        let mut logger = Logger::with_writer(writer.clone());

        let parts = Arc::new(Mutex::new(Vec::new()));
        let inner = Arc::clone(&parts);
        logger.register_sink(
            move |bytes: &[u8]| inner.lock().unwrap().push(bytes.to_vec()),
            vec![0; 64],
        );

        logger.log("t", Severity::Info, format_args!("m"));
        assert!(writer.contents().is_empty());
        assert_eq!(parts.lock().unwrap().len(), 3);
    }

    #[test]
    fn a_second_registration_replaces_the_first() {
        let mut logger = Logger::new();

        let first = Arc::new(Mutex::new(Vec::new()));
        let inner = Arc::clone(&first);
        logger.register_sink(
            move |bytes: &[u8]| inner.lock().unwrap().push(bytes.to_vec()),
            vec![0; 64],
        );

        let second = Arc::new(Mutex::new(Vec::new()));
        let inner = Arc::clone(&second);
        logger.register_sink(
            move |bytes: &[u8]| inner.lock().unwrap().push(bytes.to_vec()),
            vec![0; 64],
        );

        logger.log("t", Severity::Info, format_args!("m"));
        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 3);
    }

    #[test]
    fn level_reports_the_active_threshold() {
        let mut logger = Logger::new();
        assert_eq!(logger.level(), Severity::Verbose);
        logger.set_level(Severity::Warning);
        assert_eq!(logger.level(), Severity::Warning);
    }
}
