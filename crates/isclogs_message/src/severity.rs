//! Message severity levels ordered from least to most severe.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The severity level of a [`Message`](crate::Message).
///
/// Ordered from least severe (`Debug`) to most severe (`Fatal`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order. The
/// ordering drives both logger threshold filtering and failure classification.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Severity {
    /// Verbose output only useful while debugging.
    Debug,
    /// Everything is fine. Usually reports the absence of problems.
    #[default]
    Nominal,
    /// General information that can safely be ignored.
    Notice,
    /// A potential issue was detected; usually recoverable.
    Warning,
    /// An error occurred and the current unit of work was abandoned.
    Error,
    /// An unrecoverable error occurred.
    Fatal,
}

impl Severity {
    /// Every severity, in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Nominal,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Returns the capitalised label used when rendering messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Nominal => "Nominal",
            Severity::Notice => "Notice",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        }
    }

    /// Returns `true` if this severity is [`Error`](Severity::Error) or higher.
    pub fn is_failure(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing severity labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity: '{input}'")]
pub struct ParseSeverityError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSeverityError {
                input: s.to_string(),
            })
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeverityVisitor;

        impl<'de> Visitor<'de> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a severity label such as \"warning\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SeverityVisitor)
    }
}
