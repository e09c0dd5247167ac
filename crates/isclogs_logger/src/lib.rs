//! Threshold-filtered logging of [`Message`](isclogs_message::Message)s.
//!
//! A [`Logger`] compares each message's severity with its threshold and hands
//! the ones that pass to a [`LogSink`]. Sinks decide where messages end up; this
//! crate bundles an in-memory collector ([`MemorySink`]), a writer-backed sink
//! ([`WriterSink`]) and a bridge into `tracing` ([`TracingSink`]).

#![warn(missing_docs)]

pub mod logger;
pub mod memory;
pub mod sink;
pub mod tracing_sink;
pub mod writer;

pub use logger::Logger;
pub use memory::MemorySink;
pub use sink::{FnSink, LogSink};
pub use tracing_sink::TracingSink;
pub use writer::{WriterFormat, WriterSink};
