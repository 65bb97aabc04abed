//! Classification of raw symbol-table type codes.

use crate::parse::SymbolRecord;

/// Type codes of module-global definitions: text, global bss, read-only
/// data, data, and global data segment classes.
const EXPORT_CODES: &[char] = &['T', 'B', 'R', 'D', 'G'];

/// Type code of an undefined reference.
const IMPORT_CODE: char = 'U';

/// Static initializer/finalizer routines emitted into every artifact.
/// Housekeeping entries of the binary format, never cross-module
/// dependencies, so they are dropped under any type code.
const HOUSEKEEPING_NAMES: &[&str] = &["_init", "_fini"];

/// Semantic class of a symbol-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// Module-global definition, available to other artifacts.
    Exported,
    /// Module-global undefined reference, to be supplied by another
    /// artifact.
    Imported,
    /// Local, weak, debug, or housekeeping entry; not part of the module
    /// graph.
    Ignored,
}

/// Classifies one symbol record.
///
/// Pure function of the type code and the two housekeeping names.
pub fn classify(record: &SymbolRecord) -> SymbolClass {
    if HOUSEKEEPING_NAMES.contains(&record.name.as_str()) {
        return SymbolClass::Ignored;
    }

    if EXPORT_CODES.contains(&record.type_code) {
        SymbolClass::Exported
    } else if record.type_code == IMPORT_CODE {
        SymbolClass::Imported
    } else {
        SymbolClass::Ignored
    }
}
