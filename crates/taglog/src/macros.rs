//! Per-severity convenience macros.
//!
//! Each takes a tag and format arguments and forwards to [`crate::log`].
//! With the `logging` feature disabled every expansion is empty and the
//! arguments are never evaluated, so a disabled build carries no logging
//! cost at all.

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log($tag, $crate::Severity::Error, ::core::format_args!($($arg)*))
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($arg:tt)*) => {};
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warning {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log($tag, $crate::Severity::Warning, ::core::format_args!($($arg)*))
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warning {
    ($tag:expr, $($arg:tt)*) => {};
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log($tag, $crate::Severity::Info, ::core::format_args!($($arg)*))
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($arg:tt)*) => {};
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log($tag, $crate::Severity::Debug, ::core::format_args!($($arg)*))
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($arg:tt)*) => {};
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose).
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_verbose {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log($tag, $crate::Severity::Verbose, ::core::format_args!($($arg)*))
    };
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose).
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_verbose {
    ($tag:expr, $($arg:tt)*) => {};
}
