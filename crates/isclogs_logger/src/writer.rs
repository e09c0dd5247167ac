//! Sink that writes rendered messages to any [`io::Write`] destination.

use crate::sink::LogSink;
use isclogs_message::Message;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Controls what a [`WriterSink`] prints besides the rendered message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterFormat {
    /// Print a `--> file:line:column` line after the message.
    pub show_origin: bool,
    /// Print one `= trace:` line per trace entry.
    pub show_trace: bool,
    /// Removed from displayed function paths, if present.
    pub relative_to: Option<String>,
}

impl Default for WriterFormat {
    fn default() -> Self {
        Self {
            show_origin: true,
            show_trace: true,
            relative_to: None,
        }
    }
}

impl WriterFormat {
    /// Only the rendered message line, nothing else.
    pub fn compact() -> Self {
        Self {
            show_origin: false,
            show_trace: false,
            relative_to: None,
        }
    }

    /// Formats `message` into the text written for it, including the trailing newline.
    ///
    /// Produces output like:
    /// ```text
    /// [Error]: Disk Full - no space left
    ///   --> src/storage.rs:42:17 (app::storage::mount)
    ///   = trace: while mounting /data
    /// ```
    pub fn format(&self, message: &Message) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{message}");

        if self.show_origin {
            let origin = message.origin();
            let _ = write!(out, "  --> {origin}");
            if origin.has_function() {
                let function = message.function(self.relative_to.as_deref());
                let _ = write!(out, " ({function})");
            }
            out.push('\n');
        }

        if self.show_trace {
            for entry in message.trace() {
                let _ = writeln!(out, "  = trace: {entry}");
            }
        }

        out
    }
}

/// Writes each dispatched message to a writer.
///
/// Write failures never reach the caller: they are counted in
/// [`write_errors`](Self::write_errors) and reported through `tracing`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    format: WriterFormat,
    write_errors: AtomicUsize,
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink writing to `writer` with the default format.
    pub fn new(writer: W) -> Self {
        Self::with_format(writer, WriterFormat::default())
    }

    /// Creates a sink writing to `writer` with the given format.
    pub fn with_format(writer: W, format: WriterFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
            write_errors: AtomicUsize::new(0),
        }
    }

    /// Returns the format in use.
    pub fn format(&self) -> &WriterFormat {
        &self.format
    }

    /// Returns the number of messages that could not be written.
    pub fn write_errors(&self) -> usize {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_text(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a sink writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterSink<io::Stdout> {
    /// Creates a sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn dispatch(&self, message: &Message) {
        let text = self.format.format(message);
        if let Err(error) = self.write_text(&text) {
            self.write_errors.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(%error, code = message.code(), "failed to write log message");
        }
    }
}
