//! Threshold filtering in front of a [`LogSink`].

use crate::sink::LogSink;
use isclogs_message::{Message, Severity};

/// Forwards messages at or above a severity threshold to its sink.
///
/// The threshold is compared against [`Message::severity`], not
/// [`Message::is_failure`], so it can be set anywhere in the severity range.
/// Messages below the threshold are dropped without any observable effect on
/// the sink.
///
/// A logger is usable as soon as it is constructed. Changing the threshold
/// with [`set_severity`](Self::set_severity) only affects later calls to
/// [`log`](Self::log).
#[derive(Debug, Clone)]
pub struct Logger<S> {
    threshold: Severity,
    sink: S,
}

impl<S: LogSink> Logger<S> {
    /// Creates a logger with the default threshold of [`Severity::Nominal`].
    pub fn new(sink: S) -> Self {
        Self::with_threshold(sink, Severity::default())
    }

    /// Creates a logger with the given threshold.
    pub fn with_threshold(sink: S, threshold: Severity) -> Self {
        Self { threshold, sink }
    }

    /// Logs `message` if its severity is at or above the threshold.
    ///
    /// The sink sees the message at most once per call.
    pub fn log(&self, message: &Message) {
        if self.would_log(message.severity()) {
            self.sink.dispatch(message);
        } else {
            tracing::trace!(
                severity = %message.severity(),
                threshold = %self.threshold,
                code = message.code(),
                "message below threshold dropped"
            );
        }
    }

    /// Replaces the threshold used by subsequent [`log`](Self::log) calls.
    pub fn set_severity(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Returns the current threshold.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Returns `true` if a message with `severity` would reach the sink.
    pub fn would_log(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Returns a reference to the sink, for inspecting what it has received.
    ///
    /// Dispatching through this reference bypasses the threshold; only
    /// [`log`](Self::log) filters.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the logger, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: LogSink + Default> Default for Logger<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
