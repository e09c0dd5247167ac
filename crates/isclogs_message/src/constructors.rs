//! Shorthand constructors that fix the severity of a new message.

use crate::message::Message;
use crate::severity::Severity;
use std::borrow::Cow;

macro_rules! severity_constructors {
    ($($severity:ident => $plain:ident, $described:ident;)*) => {
        impl Message {
            $(
                #[doc = concat!(
                    "Creates a [`Severity::", stringify!($severity),
                    "`] message without a description."
                )]
                #[track_caller]
                pub fn $plain(code: u32, name: impl Into<Cow<'static, str>>) -> Self {
                    Self::new(code, name, Severity::$severity)
                }

                #[doc = concat!(
                    "Creates a [`Severity::", stringify!($severity),
                    "`] message with a description."
                )]
                #[track_caller]
                pub fn $described(
                    code: u32,
                    name: impl Into<Cow<'static, str>>,
                    description: impl Into<Cow<'static, str>>,
                ) -> Self {
                    Self::with_description(code, name, description, Severity::$severity)
                }
            )*
        }
    };
}

severity_constructors! {
    Debug => debug, debug_with_description;
    Nominal => nominal, nominal_with_description;
    Notice => notice, notice_with_description;
    Warning => warning, warning_with_description;
    Error => error, error_with_description;
    Fatal => fatal, fatal_with_description;
}
