//! Symbol table extraction from compiled artifacts.
//!
//! This crate invokes an external symbol-dump tool (`nm` by default) on a
//! compiled artifact and parses its textual output into typed
//! [`SymbolRecord`]s, which [`classify`] maps onto the three classes the
//! dependency analysis cares about: exported definitions, imported
//! references, and everything else.
//!
//! One subprocess is run per artifact, strictly sequentially, and its pipes
//! are released before the next artifact is touched — even when parsing
//! fails partway through the output.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use moddep_extract::{classify, read_symbols};
//!
//! let records = read_symbols(Path::new("module-pipe-sink.so")).unwrap();
//! for record in &records {
//!     let _ = classify(record);
//! }
//! ```

mod classify;
mod error;
mod parse;

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use tracing::debug;

#[doc(inline)]
pub use crate::classify::{SymbolClass, classify};
#[doc(inline)]
pub use crate::error::ExtractError;
use crate::error::ExtractErrorKind;
#[doc(inline)]
pub use crate::parse::SymbolRecord;

/// Environment variable naming the symbol-dump tool to invoke.
pub const ENV_NM: &str = "NM";

/// Default symbol-dump tool, looked up on `PATH`.
const DEFAULT_TOOL: &str = "nm";

/// Returns the symbol-dump tool to invoke: `$NM` if set, `nm` otherwise.
///
/// The override follows the usual toolchain-selection convention and is
/// what lets tests substitute a scripted tool.
pub fn symbol_tool() -> OsString {
    env::var_os(ENV_NM).unwrap_or_else(|| DEFAULT_TOOL.into())
}

/// Reads and parses the symbol table of one artifact.
///
/// Invokes the configured symbol-dump tool (see [`symbol_tool`]) with the
/// artifact path as its sole argument and parses the complete output.
///
/// # Errors
///
/// Returns [`ExtractError`] if:
/// - The tool cannot be launched ([`ExtractError::is_launch`])
/// - The tool exits with a failure status
///   ([`ExtractError::is_tool_failure`])
/// - The tool output is not valid UTF-8 ([`ExtractError::is_encoding`])
/// - A line does not match the symbol-table format
///   ([`ExtractError::is_malformed_line`])
///
/// A failing tool is never treated as an empty symbol table.
pub fn read_symbols(
    artifact: &Path,
) -> Result<Vec<SymbolRecord>, ExtractError> {
    read_symbols_with_tool(&symbol_tool(), artifact)
}

/// Same as [`read_symbols`], with an explicit tool instead of `$NM`/`nm`.
pub fn read_symbols_with_tool(
    tool: &OsStr,
    artifact: &Path,
) -> Result<Vec<SymbolRecord>, ExtractError> {
    // Capturing the full output reaps the child and closes both pipes on
    // every path, so a parse failure cannot leak descriptors across a
    // large artifact list.
    let output = Command::new(tool).arg(artifact).output()?;

    if !output.status.success() {
        return Err(ExtractError::new(ExtractErrorKind::Tool {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr)
                .trim()
                .to_string(),
        }));
    }

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| ExtractError::new(ExtractErrorKind::Encoding(e)))?;

    let mut records = Vec::new();
    for (index, line) in stdout.lines().enumerate() {
        records.push(parse::parse_line(line, index + 1)?);
    }

    debug!(
        artifact = %artifact.display(),
        symbols = records.len(),
        "read symbol table"
    );

    Ok(records)
}
