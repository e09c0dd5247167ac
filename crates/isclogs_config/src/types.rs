//! Configuration types deserialized from `isclogs.toml`.

use isclogs_logger::{LogSink, Logger, WriterFormat, WriterSink};
use isclogs_message::Severity;
use serde::Deserialize;

/// The top-level configuration parsed from `isclogs.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Filtering settings.
    #[serde(default)]
    pub logger: LoggerSection,
    /// Formatting settings for writer-backed sinks.
    #[serde(default)]
    pub output: OutputSection,
}

/// The `[logger]` table.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerSection {
    /// Minimum severity forwarded to the sink. Defaults to `nominal`.
    #[serde(default)]
    pub threshold: Severity,
}

/// The `[output]` table.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Print the origin line under each message.
    #[serde(default = "default_true")]
    pub show_origin: bool,
    /// Print the trace entries under each message.
    #[serde(default = "default_true")]
    pub show_trace: bool,
    /// Prefix removed from displayed function paths.
    #[serde(default)]
    pub relative_to: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            show_origin: true,
            show_trace: true,
            relative_to: None,
        }
    }
}

impl LogConfig {
    /// Returns the writer format described by the `[output]` table.
    pub fn writer_format(&self) -> WriterFormat {
        WriterFormat {
            show_origin: self.output.show_origin,
            show_trace: self.output.show_trace,
            relative_to: self.output.relative_to.clone(),
        }
    }

    /// Builds a logger around `sink` using the configured threshold.
    pub fn build_logger<S: LogSink>(&self, sink: S) -> Logger<S> {
        Logger::with_threshold(sink, self.logger.threshold)
    }

    /// Builds a logger writing to standard error with the configured format.
    pub fn stderr_logger(&self) -> Logger<WriterSink<std::io::Stderr>> {
        self.build_logger(WriterSink::with_format(
            std::io::stderr(),
            self.writer_format(),
        ))
    }
}
