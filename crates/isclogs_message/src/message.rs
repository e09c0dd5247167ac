//! Severity-tagged diagnostic messages with origin metadata and an accumulating trace.

use crate::origin::Origin;
use crate::severity::Severity;
use std::borrow::Cow;
use std::fmt;

/// Name given to messages built with [`Message::default`].
pub const DEFAULT_NAME: &str = "Default Name";

/// Description reported by [`Message::description`] when none was supplied.
pub const DEFAULT_DESCRIPTION: &str = "Default Description";

/// One diagnostic event.
///
/// A message is created where a problem is detected, optionally enriched with
/// trace entries and severity promotions as it travels up the call chain, and
/// finally handed to a logger or inspected directly.
///
/// Code, name, description and origin are fixed at construction. Only the
/// severity (via [`promote`](Self::promote), which never lowers it) and the
/// trace (via [`add_trace`](Self::add_trace)) change afterwards. No operation on
/// a message can fail or panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    code: u32,
    name: Cow<'static, str>,
    description: Option<Cow<'static, str>>,
    severity: Severity,
    origin: Origin,
    trace: Vec<String>,
}

impl Message {
    /// Creates a message without a description.
    ///
    /// The origin is the location of the caller.
    #[track_caller]
    pub fn new(code: u32, name: impl Into<Cow<'static, str>>, severity: Severity) -> Self {
        Self {
            code,
            name: name.into(),
            description: None,
            severity,
            origin: Origin::here(),
            trace: Vec::new(),
        }
    }

    /// Creates a message with a description.
    ///
    /// The origin is the location of the caller.
    #[track_caller]
    pub fn with_description(
        code: u32,
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        severity: Severity,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            description: Some(description.into()),
            severity,
            origin: Origin::here(),
            trace: Vec::new(),
        }
    }

    /// Constructor behind [`message!`](crate::message); records the function
    /// enclosing `marker` in the origin.
    #[doc(hidden)]
    #[track_caller]
    pub fn __new_in<F>(
        marker: F,
        code: u32,
        name: impl Into<Cow<'static, str>>,
        description: Option<Cow<'static, str>>,
        severity: Severity,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            description,
            severity,
            origin: Origin::here_in(marker),
            trace: Vec::new(),
        }
    }

    /// Raises the severity to at least `severity`.
    ///
    /// Promoting to a lower or equal severity does nothing.
    pub fn promote(&mut self, severity: Severity) -> &mut Self {
        if self.severity < severity {
            self.severity = severity;
        }
        self
    }

    /// Consuming form of [`promote`](Self::promote).
    pub fn promoted(mut self, severity: Severity) -> Self {
        self.promote(severity);
        self
    }

    /// Appends an entry to the end of the trace.
    ///
    /// If the trace cannot grow, the entry is dropped rather than failing.
    pub fn add_trace(&mut self, text: impl Into<String>) -> &mut Self {
        if self.trace.try_reserve(1).is_ok() {
            self.trace.push(text.into());
        }
        self
    }

    /// Consuming form of [`add_trace`](Self::add_trace).
    pub fn with_trace(mut self, text: impl Into<String>) -> Self {
        self.add_trace(text);
        self
    }

    /// Returns the human-readable form, `[<Severity>]: <name>` followed by
    /// ` - <description>` when a description is present.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the severity is [`Severity::Error`] or higher.
    pub fn is_failure(&self) -> bool {
        self.severity.is_failure()
    }

    /// Returns the numeric code.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Returns the short title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if a description was supplied.
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// Returns the description, or [`DEFAULT_DESCRIPTION`] if none was supplied.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Returns the current severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the trace entries in insertion order.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Returns where the message was constructed.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Returns the file the message was constructed in.
    pub fn file(&self) -> &'static str {
        self.origin.file()
    }

    /// Returns the line the message was constructed on.
    pub fn line(&self) -> u32 {
        self.origin.line()
    }

    /// Returns the column the message was constructed at.
    pub fn column(&self) -> u32 {
        self.origin.column()
    }

    /// Returns the enclosing function, optionally shortened by removing the
    /// first occurrence of `relative_to`.
    pub fn function(&self, relative_to: Option<&str>) -> Cow<'static, str> {
        match relative_to {
            Some(relative_to) => self.origin.function_relative_to(relative_to),
            None => Cow::Borrowed(self.origin.function()),
        }
    }
}

impl Default for Message {
    #[track_caller]
    fn default() -> Self {
        Self::with_description(
            0,
            DEFAULT_NAME,
            DEFAULT_DESCRIPTION,
            Severity::default(),
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.severity, self.name)?;
        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Message {}
