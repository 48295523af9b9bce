//! Pluggable sink for progress and data hygiene diagnostics.

use std::fmt;

#[macro_export]
macro_rules! report_info {
    ($reporter:expr, $($arg:tt)*) => {
        $crate::reporter::Reporter::info($reporter, &format_args!($($arg)*));
    }
}

#[macro_export]
macro_rules! report_warn {
    ($reporter:expr, $($arg:tt)*) => {
        $crate::reporter::Reporter::warn($reporter, &format_args!($($arg)*));
    }
}

pub trait Reporter {
    /// Report progress.
    fn info(&self, value: &dyn fmt::Display);

    /// Report suspicious but non-fatal input.
    fn warn(&self, value: &dyn fmt::Display);
}

impl<T> Reporter for &T
where
    T: ?Sized + Reporter,
{
    #[inline]
    fn info(&self, value: &dyn fmt::Display) {
        (*self).info(value);
    }

    #[inline]
    fn warn(&self, value: &dyn fmt::Display) {
        (*self).warn(value);
    }
}

/// Reporter which forwards to `tracing`.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    #[inline]
    fn info(&self, value: &dyn fmt::Display) {
        tracing::event!(tracing::Level::INFO, "{}", value);
    }

    #[inline]
    fn warn(&self, value: &dyn fmt::Display) {
        tracing::event!(tracing::Level::WARN, "{}", value);
    }
}
