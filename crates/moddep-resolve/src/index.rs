//! Export and import index construction.
//!
//! The builder consumes one artifact's classified symbols at a time, in the
//! order artifacts were given on input, and updates two indexes in a single
//! forward pass: who exports each symbol name, and which tracked names each
//! artifact imports. Export conflicts are diagnosed as they are found, so
//! conflict order follows input order.

use std::collections::HashMap;
use std::io::Write;

use indexmap::IndexMap;
use moddep_extract::{SymbolClass, SymbolRecord, classify};

use crate::error::ResolveError;

/// Naming prefix of the shared core API. Undefined references outside this
/// prefix (libc, pthread, ...) are not part of the module graph and are
/// dropped without diagnostics.
pub const TRACKED_PREFIX: &str = "pa_";

/// The two symbol indexes built over the whole input set.
#[derive(Debug, Default)]
pub struct SymbolIndexes {
    /// Symbol name to the single artifact exporting it. On a duplicate
    /// definition the first writer keeps the entry.
    pub exports: HashMap<String, String>,
    /// Artifact to its imported names, filtered to [`TRACKED_PREFIX`], in
    /// symbol-table order. Duplicates persist here; the resolver
    /// deduplicates.
    pub imports: IndexMap<String, Vec<String>>,
    /// Every analyzed artifact in input order, whether or not it imports
    /// anything. Seeds the dependency map so an artifact without
    /// dependencies still gets a report line.
    pub artifacts: Vec<String>,
}

/// Accumulates classified symbols into [`SymbolIndexes`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    indexes: SymbolIndexes,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one artifact's symbol records, in symbol-table order.
    ///
    /// A duplicate export — from another artifact or from a second
    /// definition within this one — writes a CONFLICT line to
    /// `diagnostics` naming the symbol, this artifact, and the artifact
    /// holding the export; the holder keeps it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if writing a diagnostic fails.
    pub fn add_artifact(
        &mut self,
        artifact: &str,
        records: &[SymbolRecord],
        diagnostics: &mut dyn Write,
    ) -> Result<(), ResolveError> {
        self.indexes.artifacts.push(artifact.to_string());

        for record in records {
            match classify(record) {
                SymbolClass::Exported => {
                    if let Some(holder) = self.indexes.exports.get(&record.name)
                    {
                        writeln!(
                            diagnostics,
                            "CONFLICT: symbol '{}' exported by both '{}' \
                             and '{}'",
                            record.name, artifact, holder
                        )?;
                    } else {
                        self.indexes
                            .exports
                            .insert(record.name.clone(), artifact.to_string());
                    }
                }
                SymbolClass::Imported
                    if record.name.starts_with(TRACKED_PREFIX) =>
                {
                    self.indexes
                        .imports
                        .entry(artifact.to_string())
                        .or_default()
                        .push(record.name.clone());
                }
                SymbolClass::Imported | SymbolClass::Ignored => {}
            }
        }

        Ok(())
    }

    /// Returns the finished indexes.
    pub fn finish(self) -> SymbolIndexes {
        self.indexes
    }
}
