//! Dependency resolution and reporting over extracted symbol tables.
//!
//! This crate is the pipeline downstream of `moddep-extract`: it feeds each
//! artifact's classified symbols into the export and import indexes,
//! cross-references imports against exports into a dependency map plus an
//! unresolved-symbol map, and renders the deterministic report.
//!
//! All accumulator state lives in the [`run`] call; nothing is shared or
//! retained across runs.
//!
//! ## Usage
//!
//! ```no_run
//! let artifacts = vec!["module-pipe-sink.so".to_string()];
//! let stdout = std::io::stdout();
//! let stderr = std::io::stderr();
//! moddep_resolve::run(
//!     &artifacts,
//!     &mut stdout.lock(),
//!     &mut stderr.lock(),
//! )
//! .unwrap();
//! ```

mod error;
mod index;
mod report;
mod resolve;

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

// Re-export the record types for convenience.
#[doc(inline)]
pub use moddep_extract::{SymbolClass, SymbolRecord};
use tracing::{debug_span, warn};

#[doc(inline)]
pub use crate::error::ResolveError;
#[doc(inline)]
pub use crate::index::{IndexBuilder, SymbolIndexes, TRACKED_PREFIX};
#[doc(inline)]
pub use crate::report::write_report;
#[doc(inline)]
pub use crate::resolve::{Resolution, resolve};

/// Runs the whole analysis over `artifacts`, in the order given.
///
/// Reads each artifact's symbol table with the configured symbol-dump tool
/// (see [`moddep_extract::symbol_tool`]), builds the indexes, resolves
/// dependencies, and writes the report: CONFLICT and WARNING lines to
/// `diagnostics`, the dependency listing to `output`.
///
/// An artifact whose symbol table cannot be read is skipped with a logged
/// warning and contributes nothing to the report; one bad artifact does not
/// block reporting on the rest.
///
/// # Errors
///
/// Returns [`ResolveError`] if writing to either stream fails
/// ([`ResolveError::is_io`]).
pub fn run(
    artifacts: &[String],
    output: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<(), ResolveError> {
    run_with_tool(&moddep_extract::symbol_tool(), artifacts, output, diagnostics)
}

/// Same as [`run`], with an explicit symbol-dump tool instead of `$NM`/`nm`.
pub fn run_with_tool(
    tool: &OsStr,
    artifacts: &[String],
    output: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<(), ResolveError> {
    let mut builder = IndexBuilder::new();

    for artifact in artifacts {
        let _span = debug_span!("analyze", artifact = %artifact).entered();
        match moddep_extract::read_symbols_with_tool(
            tool,
            Path::new(artifact),
        ) {
            Ok(records) => {
                builder.add_artifact(artifact, &records, diagnostics)?;
            }
            Err(e) => {
                warn!(artifact = %artifact, error = %e, "skipping artifact");
            }
        }
    }

    let indexes = builder.finish();
    let resolution = resolve(&indexes);
    write_report(&resolution, output, diagnostics)?;

    Ok(())
}
