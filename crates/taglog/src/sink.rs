//! Custom-sink output strategy.

use std::fmt::{self, Write as _};

use crate::format::{self, BoundedWriter};
use crate::level::Severity;

/// Callback receiving each rendered framing part.
///
/// The slice points into the registered scratch buffer and is only valid for
/// the duration of the call: the next part, and the next message, overwrite
/// the same bytes.
pub type SinkFn = dyn FnMut(&[u8]) + Send;

/// A registered sink: the callback plus the reusable scratch buffer every
/// part is rendered through.
pub(crate) struct CustomSink {
    callback: Box<SinkFn>,
    scratch: Box<[u8]>,
}

impl CustomSink {
    pub(crate) fn new(callback: Box<SinkFn>, scratch: Vec<u8>) -> Self {
        Self {
            callback,
            scratch: scratch.into_boxed_slice(),
        }
    }

    /// Renders and delivers one message as prefix, body, suffix.
    ///
    /// Each part is rendered into the scratch buffer from offset zero,
    /// truncated at capacity, and handed to the callback only if it produced
    /// at least one byte without a formatting error. A skipped part never
    /// suppresses the parts after it.
    pub(crate) fn deliver(
        &mut self,
        severity: Severity,
        elapsed: f64,
        tag: &str,
        args: fmt::Arguments<'_>,
    ) {
        self.part(|out| format::write_prefix(out, severity, elapsed, tag));
        self.part(|out| out.write_fmt(args));
        self.part(|out| format::write_suffix(out));
    }

    fn part<F>(&mut self, render: F)
    where
        F: FnOnce(&mut BoundedWriter<'_>) -> fmt::Result,
    {
        let mut out = BoundedWriter::new(&mut self.scratch);
        let rendered = render(&mut out);
        let len = out.len();
        if rendered.is_ok() && len > 0 {
            (self.callback)(&self.scratch[..len]);
        }
    }
}
