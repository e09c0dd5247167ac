//! End-to-end behaviour of messages passing through loggers into sinks.

use isclogs_logger::{FnSink, LogSink, Logger, MemorySink, WriterFormat, WriterSink};
use isclogs_message::{message, Message, Severity};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times it was dispatched to.
#[derive(Default)]
struct CountingSink {
    calls: Cell<usize>,
}

impl LogSink for CountingSink {
    fn dispatch(&self, _message: &Message) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[test]
fn sink_receives_message_iff_severity_reaches_threshold() {
    for threshold in Severity::ALL {
        for severity in Severity::ALL {
            let logger = Logger::with_threshold(CountingSink::default(), threshold);
            logger.log(&Message::new(0, "probe", severity));
            let expected = usize::from(severity >= threshold);
            assert_eq!(
                logger.sink().calls.get(),
                expected,
                "threshold {threshold}, severity {severity}"
            );
        }
    }
}

#[test]
fn warning_threshold_examples() {
    let logger = Logger::with_threshold(CountingSink::default(), Severity::Warning);
    logger.log(&Message::notice(1, "ignored"));
    assert_eq!(logger.sink().calls.get(), 0);
    logger.log(&Message::error(2, "delivered"));
    assert_eq!(logger.sink().calls.get(), 1);
}

#[test]
fn raising_threshold_does_not_touch_delivered_messages() {
    let mut logger = Logger::new(MemorySink::new());
    logger.log(&Message::warning(1, "before"));
    logger.set_severity(Severity::Error);
    logger.log(&Message::warning(2, "after"));

    let delivered = logger.into_sink().take_all();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].render(), "[Warning]: before");
}

#[test]
fn lowering_threshold_lets_more_through() {
    let mut logger = Logger::with_threshold(MemorySink::new(), Severity::Fatal);
    logger.log(&Message::debug(1, "dropped"));
    logger.set_severity(Severity::Debug);
    logger.log(&Message::debug(2, "kept"));
    assert_eq!(logger.sink().messages()[0].name(), "kept");
}

#[test]
fn promotion_on_the_way_up_changes_filtering() {
    let logger = Logger::with_threshold(MemorySink::new(), Severity::Error);

    let mut msg = Message::notice(17, "Checksum Mismatch");
    msg.add_trace("verify_block");
    logger.log(&msg);
    assert!(logger.sink().is_empty());

    msg.add_trace("restore_backup").promote(Severity::Error);
    logger.log(&msg);

    let delivered = logger.sink().messages();
    assert_eq!(delivered.len(), 1);
    assert!(delivered[0].is_failure());
    assert_eq!(delivered[0].trace(), ["verify_block", "restore_backup"]);
}

#[test]
fn independent_loggers_over_one_collector() {
    let collected = MemorySink::new();
    let console = Logger::with_threshold(&collected, Severity::Warning);
    let audit = Logger::with_threshold(&collected, Severity::Debug);

    let msg = Message::notice(5, "Login");
    console.log(&msg);
    audit.log(&msg);

    assert_eq!(collected.len(), 1);
    assert!(!collected.has_failures());
}

#[test]
fn boxed_sinks_are_interchangeable() {
    let collected = Arc::new(MemorySink::new());
    let written = Arc::new(WriterSink::with_format(Vec::new(), WriterFormat::compact()));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let sinks: Vec<Box<dyn LogSink>> = vec![
        Box::new(Arc::clone(&collected)),
        Box::new(Arc::clone(&written)),
        Box::new(FnSink::new(move |_: &Message| {
            counter.fetch_add(1, Ordering::Relaxed);
        })),
    ];
    for sink in sinks {
        let logger = Logger::new(sink);
        logger.log(&Message::fatal(1, "Shutdown"));
        logger.log(&Message::debug(2, "below default threshold"));
    }

    assert_eq!(collected.len(), 1);
    assert_eq!(collected.failure_count(), 1);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    let output = Arc::try_unwrap(written)
        .ok()
        .expect("loggers released the writer")
        .into_inner();
    assert_eq!(String::from_utf8(output).unwrap(), "[Fatal]: Shutdown\n");
}

#[test]
fn writer_logger_renders_passing_messages() {
    let logger = Logger::with_threshold(
        WriterSink::with_format(Vec::new(), WriterFormat::compact()),
        Severity::Warning,
    );
    logger.log(&Message::notice(1, "Started"));
    logger.log(&Message::error_with_description(28, "Disk Full", "no space left"));
    logger.log(&Message::new(0, "Disk Full", Severity::Error));

    let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
    assert_eq!(
        output,
        "[Error]: Disk Full - no space left\n[Error]: Disk Full\n"
    );
}

fn open_store() -> Message {
    message!(Severity::Fatal, 99, "Store Unavailable", "lock held by another process")
}

#[test]
fn macro_origin_survives_logging() {
    let logger = Logger::new(MemorySink::new());
    logger.log(&open_store());

    let delivered = logger.sink().messages();
    let msg = &delivered[0];
    assert!(msg.file().ends_with("filtering.rs"));
    assert!(msg.function(None).ends_with("open_store"));
    assert_eq!(msg.function(Some("filtering::")), "open_store");
    assert_eq!(msg.function(Some("not_in_path")), msg.function(None));
}
