//! Error types for the moddep-extract crate.

use std::backtrace::Backtrace;
use std::fmt;
use std::process::ExitStatus;

/// Error type for symbol table extraction operations.
///
/// This error captures failures that can occur while invoking the
/// symbol-dump tool and parsing its output. Uses the canonical struct
/// pattern with backtrace capture and `is_xxx()` helper methods.
///
/// Every variant is scoped to a single artifact: the caller decides whether
/// a failed artifact aborts the batch or is skipped with a diagnostic.
#[derive(Debug)]
pub struct ExtractError {
    kind: ExtractErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods.
#[derive(Debug)]
pub(crate) enum ExtractErrorKind {
    /// The symbol-dump tool could not be launched.
    Launch(std::io::Error),
    /// The symbol-dump tool ran but exited with a failure status.
    Tool { status: ExitStatus, stderr: String },
    /// The symbol-dump tool produced output that is not valid UTF-8.
    Encoding(std::string::FromUtf8Error),
    /// A line of tool output does not match the symbol-table format.
    MalformedLine { number: usize, line: String },
}

impl ExtractError {
    /// Creates an error from an error kind, capturing a backtrace.
    pub(crate) fn new(kind: ExtractErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    /// Returns true if the symbol-dump tool could not be launched.
    pub fn is_launch(&self) -> bool {
        matches!(self.kind, ExtractErrorKind::Launch(_))
    }

    /// Returns true if the symbol-dump tool exited with a failure status.
    pub fn is_tool_failure(&self) -> bool {
        matches!(self.kind, ExtractErrorKind::Tool { .. })
    }

    /// Returns true if the tool output was not valid UTF-8.
    pub fn is_encoding(&self) -> bool {
        matches!(self.kind, ExtractErrorKind::Encoding(_))
    }

    /// Returns true if a line of tool output could not be parsed.
    pub fn is_malformed_line(&self) -> bool {
        matches!(self.kind, ExtractErrorKind::MalformedLine { .. })
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for ExtractErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractErrorKind::Launch(err) => {
                write!(f, "failed to launch symbol-dump tool: {err}")
            }
            ExtractErrorKind::Tool { status, stderr } => {
                if stderr.is_empty() {
                    write!(f, "symbol-dump tool exited with {status}")
                } else {
                    write!(f, "symbol-dump tool exited with {status}: {stderr}")
                }
            }
            ExtractErrorKind::Encoding(err) => {
                write!(f, "symbol-dump output is not valid UTF-8: {err}")
            }
            ExtractErrorKind::MalformedLine { number, line } => {
                write!(f, "malformed symbol-table line {number}: {line:?}")
            }
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary of what happened.
        writeln!(f, "{}", self.kind)?;

        // Backtrace (will be empty unless RUST_BACKTRACE is set).
        write!(f, "{}", self.backtrace)
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ExtractErrorKind::Launch(err) => Some(err),
            ExtractErrorKind::Encoding(err) => Some(err),
            ExtractErrorKind::Tool { .. }
            | ExtractErrorKind::MalformedLine { .. } => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: ExtractErrorKind::Launch(err),
            backtrace: Backtrace::capture(),
        }
    }
}
