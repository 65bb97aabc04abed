//! Error types for the moddep-resolve crate.

use std::backtrace::Backtrace;
use std::fmt;

/// Error type for dependency resolution and reporting operations.
///
/// Per-artifact extraction failures never surface here; the pipeline skips
/// those artifacts and continues. What remains is failure to write the
/// report or a diagnostic, which does abort the run. Uses the canonical
/// struct pattern with backtrace capture and `is_xxx()` helper methods.
#[derive(Debug)]
pub struct ResolveError {
    kind: ResolveErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods.
#[derive(Debug)]
pub(crate) enum ResolveErrorKind {
    /// I/O error when writing the report or a diagnostic.
    Io(std::io::Error),
}

impl ResolveError {
    /// Returns true if this error is due to I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ResolveErrorKind::Io(_))
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveErrorKind::Io(err) => {
                write!(f, "I/O error: {err}")
            }
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary of what happened.
        writeln!(f, "{}", self.kind)?;

        // Backtrace (will be empty unless RUST_BACKTRACE is set).
        write!(f, "{}", self.backtrace)
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ResolveErrorKind::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ResolveError {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: ResolveErrorKind::Io(err),
            backtrace: Backtrace::capture(),
        }
    }
}
