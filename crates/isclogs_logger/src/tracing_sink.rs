//! Sink that forwards messages to the `tracing` ecosystem.

use crate::sink::LogSink;
use isclogs_message::{Message, Severity};

/// Re-emits each message as a `tracing` event.
///
/// Severities map onto `tracing` levels as follows:
///
/// | severity             | level   |
/// |----------------------|---------|
/// | `Debug`              | `DEBUG` |
/// | `Nominal`, `Notice`  | `INFO`  |
/// | `Warning`            | `WARN`  |
/// | `Error`, `Fatal`     | `ERROR` |
///
/// The event carries `code`, `severity`, `file`, `line`, `column`, `function`
/// and `trace` fields, and the rendered message as its text. Whatever
/// subscriber is installed decides where it ends up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

macro_rules! emit {
    ($level:ident, $message:ident) => {
        tracing::$level!(
            code = $message.code(),
            severity = %$message.severity(),
            file = $message.file(),
            line = $message.line(),
            column = $message.column(),
            function = %$message.function(None),
            trace = ?$message.trace(),
            "{}",
            $message
        )
    };
}

impl LogSink for TracingSink {
    fn dispatch(&self, message: &Message) {
        match message.severity() {
            Severity::Debug => emit!(debug, message),
            Severity::Nominal | Severity::Notice => emit!(info, message),
            Severity::Warning => emit!(warn, message),
            Severity::Error | Severity::Fatal => emit!(error, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn warning_maps_to_warn() {
        let output = capture(|| TracingSink::new().dispatch(&Message::warning(41, "Hot")));
        assert!(output.contains("WARN"));
        assert!(output.contains("[Warning]: Hot"));
        assert!(output.contains("code=41"));
    }

    #[test]
    fn fatal_maps_to_error() {
        let output = capture(|| TracingSink::new().dispatch(&Message::fatal(1, "Gone")));
        assert!(output.contains("ERROR"));
        assert!(output.contains("severity=Fatal"));
    }

    #[test]
    fn notice_maps_to_info() {
        let output = capture(|| TracingSink::new().dispatch(&Message::notice(1, "Hello")));
        assert!(output.contains("INFO"));
        assert!(output.contains("[Notice]: Hello"));
    }

    #[test]
    fn logger_reports_dropped_messages_at_trace() {
        let output = capture(|| {
            let logger = crate::Logger::with_threshold(TracingSink::new(), Severity::Error);
            logger.log(&Message::notice(7, "filtered"));
        });
        assert!(output.contains("TRACE"));
        assert!(output.contains("message below threshold dropped"));
        assert!(!output.contains("[Notice]: filtered"));
    }
}
