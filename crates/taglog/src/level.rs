//! Message severities and their display colors.

use std::fmt;

/// ANSI sequence closing every rendered message.
pub(crate) const ANSI_RESET: &str = "\x1b[0m";

/// Severity of a log message, most severe first.
///
/// Declaration order is the rank: a message passes the level gate when its
/// severity is less than or equal to the configured threshold. `Error`
/// therefore passes at every threshold, and `Verbose` only at the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Unrecoverable errors.
    Error,
    /// Recoverable issues.
    Warning,
    /// Lifecycle events.
    Info,
    /// Flow and state detail.
    Debug,
    /// Noisiest wire-level detail.
    Verbose,
}

impl Severity {
    /// Every severity, most severe first.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Verbose,
    ];

    /// Upper-case level name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
        }
    }

    /// ANSI sequence opening a message of this severity.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Error => "\x1b[0;31m",
            Self::Warning => "\x1b[0;33m",
            Self::Info => "\x1b[0;32m",
            Self::Debug => "\x1b[0;34m",
            Self::Verbose => "\x1b[0;35m",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_is_total_and_fixed() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert!(Severity::Debug < Severity::Verbose);
    }

    #[test]
    fn gate_comparison_matches_the_ranking() {
        // Threshold Info: Warning passes, Debug does not.
        let threshold = Severity::Info;
        assert!(Severity::Warning <= threshold);
        assert!(Severity::Debug > threshold);
    }

    #[test]
    fn colors_are_distinct() {
        for a in Severity::ALL {
            for b in Severity::ALL {
                if a != b {
                    assert_ne!(a.color(), b.color());
                }
            }
        }
    }

    #[test]
    fn display_uses_upper_case_names() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Verbose.to_string(), "VERBOSE");
    }
}
