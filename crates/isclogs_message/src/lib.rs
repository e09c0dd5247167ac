//! Severity-tagged diagnostic messages.
//!
//! A [`Message`] carries a numeric code, a name, an optional description, the
//! [`Origin`] it was created at and a trace of annotations added as it propagates.
//! Its [`Severity`] can be promoted but never lowered, and messages at
//! [`Severity::Error`] or above are classified as failures.

#![warn(missing_docs)]

pub mod constructors;
pub mod message;
pub mod origin;
pub mod severity;

pub use message::{Message, DEFAULT_DESCRIPTION, DEFAULT_NAME};
pub use origin::{Origin, UNKNOWN_FUNCTION};
pub use severity::{ParseSeverityError, Severity};

/// Creates a [`Message`] that also records the enclosing function in its origin.
///
/// ```
/// use isclogs_message::{message, Severity};
///
/// fn mount() -> isclogs_message::Message {
///     message!(Severity::Error, 28, "Disk Full", "no space left")
/// }
///
/// let msg = mount();
/// assert_eq!(msg.render(), "[Error]: Disk Full - no space left");
/// assert!(msg.function(None).ends_with("mount"));
/// ```
#[macro_export]
macro_rules! message {
    ($severity:expr, $code:expr, $name:expr $(,)?) => {{
        fn __isclogs_marker() {}
        $crate::Message::__new_in(__isclogs_marker, $code, $name, None, $severity)
    }};
    ($severity:expr, $code:expr, $name:expr, $description:expr $(,)?) => {{
        fn __isclogs_marker() {}
        $crate::Message::__new_in(
            __isclogs_marker,
            $code,
            $name,
            Some(::std::convert::Into::into($description)),
            $severity,
        )
    }};
}
