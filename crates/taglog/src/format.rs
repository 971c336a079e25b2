//! Three-part message framing and bounded rendering.
//!
//! Every delivered message consists of exactly three parts, in order:
//! a colored timestamp/tag prefix, the formatted body, and a reset/newline
//! suffix. Both output strategies render through the writers here, so the
//! framing shape is defined in one place.

use std::fmt;
use std::io;

use crate::level::{ANSI_RESET, Severity};

/// Writes the framing prefix: color, elapsed seconds, tag.
pub(crate) fn write_prefix<W: fmt::Write>(
    out: &mut W,
    severity: Severity,
    elapsed: f64,
    tag: &str,
) -> fmt::Result {
    write!(out, "{}[{elapsed:.6}] {tag}: ", severity.color())
}

/// Writes the framing suffix: color reset and newline.
pub(crate) fn write_suffix<W: fmt::Write>(out: &mut W) -> fmt::Result {
    writeln!(out, "{ANSI_RESET}")
}

/// Adapts an `io::Write` to the `fmt::Write` the framing functions take.
///
/// An I/O failure surfaces as `fmt::Error`, which the dispatcher treats as
/// "drop this part" like any other degenerate render.
pub(crate) struct IoAdapter<'a>(pub(crate) &'a mut (dyn io::Write + Send));

impl fmt::Write for IoAdapter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// `fmt::Write` over a fixed byte slice with bounded-formatting truncation.
///
/// A write that would overflow is cut at the last UTF-8 boundary that fits
/// and still reports success, so the remaining fragments of the part are
/// formatted and discarded rather than aborting the part. Only a formatting
/// error from the value being rendered fails the part.
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far.
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let avail = self.buf.len() - self.len;
        let take = if s.len() <= avail {
            s.len()
        } else {
            let mut end = avail;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            end
        };
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}
