//! Cross-referencing of imports against the export index.

use std::collections::{HashMap, HashSet};

use crate::index::SymbolIndexes;

/// Outcome of dependency resolution.
///
/// Both maps use set semantics and are sorted only at report time.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Artifact to the artifacts it depends on. Every analyzed artifact has
    /// an entry, possibly empty.
    pub dependencies: HashMap<String, HashSet<String>>,
    /// Imported symbol name to the artifacts that need it, for tracked
    /// symbols with no exporter among the inputs.
    pub unresolved: HashMap<String, HashSet<String>>,
}

/// Resolves every tracked import against the export index.
///
/// An import whose name is in the export index adds the exporting artifact
/// to the importer's dependency set; dependency sets deduplicate, so many
/// imports satisfied by one exporter record it once. An import with no
/// exporter is recorded under its symbol name with every artifact that
/// needs it.
///
/// An artifact that imports a symbol it is itself the recorded exporter of
/// resolves to itself; that self-loop is intentional and not suppressed.
pub fn resolve(indexes: &SymbolIndexes) -> Resolution {
    let mut resolution = Resolution::default();

    // Seed every analyzed artifact so artifacts without dependencies are
    // still reported.
    for artifact in &indexes.artifacts {
        resolution.dependencies.entry(artifact.clone()).or_default();
    }

    for (artifact, names) in &indexes.imports {
        for name in names {
            match indexes.exports.get(name) {
                Some(exporter) => {
                    resolution
                        .dependencies
                        .entry(artifact.clone())
                        .or_default()
                        .insert(exporter.clone());
                }
                None => {
                    resolution
                        .unresolved
                        .entry(name.clone())
                        .or_default()
                        .insert(artifact.clone());
                }
            }
        }
    }

    resolution
}
