//! The extension point that receives messages which passed a logger's filter.

use isclogs_message::Message;
use std::sync::Arc;

/// Final destination for messages that passed a [`Logger`](crate::Logger)'s threshold.
///
/// Implementations write to a console, a file, a socket, or anything else.
/// `dispatch` cannot fail: a sink that hits an error while writing must
/// absorb it, since the program being diagnosed must never be brought down by
/// its own diagnostics.
pub trait LogSink {
    /// Takes final disposition of a message.
    fn dispatch(&self, message: &Message);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn dispatch(&self, message: &Message) {
        (**self).dispatch(message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn dispatch(&self, message: &Message) {
        (**self).dispatch(message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn dispatch(&self, message: &Message) {
        (**self).dispatch(message);
    }
}

/// Adapts a closure into a [`LogSink`].
pub struct FnSink<F>(F);

impl<F: Fn(&Message)> FnSink<F> {
    /// Wraps `f` so it is called for every dispatched message.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn(&Message)> LogSink for FnSink<F> {
    fn dispatch(&self, message: &Message) {
        (self.0)(message);
    }
}
