//! Call-site locations recorded when a message is constructed.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Function name reported when the enclosing function was not recorded.
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// Path suffix of the marker item defined by [`message!`](crate::message).
const MARKER_SUFFIX: &str = "::__isclogs_marker";

/// The location in source code where a [`Message`](crate::Message) was created.
///
/// File, line and column come from [`Location::caller`], so every constructor
/// along the way is `#[track_caller]` and the recorded position is the caller's,
/// not this crate's. The enclosing function is only known when the message was
/// built through [`message!`](crate::message); otherwise it reads as
/// [`UNKNOWN_FUNCTION`].
///
/// There is no way to build an `Origin` from arbitrary coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Origin {
    file: &'static str,
    line: u32,
    column: u32,
    function: Option<&'static str>,
}

impl Origin {
    /// Captures the location of the caller.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
            function: None,
        }
    }

    /// Captures the location of the caller together with the function
    /// enclosing `marker`.
    ///
    /// `marker` is the local item [`message!`](crate::message) defines at the
    /// call site; its parent path is the enclosing function. Any other fn item
    /// records its own path.
    #[track_caller]
    pub(crate) fn here_in<F>(_marker: F) -> Self {
        let path = std::any::type_name::<F>();
        let function = path
            .strip_suffix(MARKER_SUFFIX)
            .filter(|parent| !parent.is_empty())
            .unwrap_or(path);
        Self {
            function: Some(function),
            ..Self::here()
        }
    }

    /// Returns the source file path as reported by the compiler.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the final component of the source file path.
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    /// Returns the line number (1-indexed).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column number (1-indexed).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the path of the enclosing function, or [`UNKNOWN_FUNCTION`].
    pub fn function(&self) -> &'static str {
        self.function.unwrap_or(UNKNOWN_FUNCTION)
    }

    /// Returns `true` if the enclosing function was recorded.
    pub fn has_function(&self) -> bool {
        self.function.is_some()
    }

    /// Returns the function path with the first occurrence of `relative_to` removed.
    ///
    /// This only shortens the displayed text. If `relative_to` is empty or does
    /// not occur, the path is returned unchanged.
    pub fn function_relative_to(&self, relative_to: &str) -> Cow<'static, str> {
        strip_first(self.function(), relative_to)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

fn strip_first(text: &'static str, pattern: &str) -> Cow<'static, str> {
    if pattern.is_empty() {
        return Cow::Borrowed(text);
    }
    match text.find(pattern) {
        Some(pos) => {
            let mut trimmed = String::with_capacity(text.len() - pattern.len());
            trimmed.push_str(&text[..pos]);
            trimmed.push_str(&text[pos + pattern.len()..]);
            Cow::Owned(trimmed)
        }
        None => Cow::Borrowed(text),
    }
}
