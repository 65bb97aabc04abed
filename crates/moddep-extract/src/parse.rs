//! Line parser for the symbol-dump output format.
//!
//! The tool prints one symbol per line. A defined symbol carries a
//! hexadecimal address, a one-character type code, and the symbol name; an
//! undefined reference blank-pads the address column, so its first field is
//! the type code:
//!
//! ```text
//! 0000000000001040 T pa_context_new
//!                  U pa_stream_write
//! ```
//!
//! Field positions are taken by whitespace tokenization rather than byte
//! offsets, so both 8- and 16-digit address columns parse the same way.
//! Anything that does not match one of the two shapes is rejected rather
//! than read at assumed column positions.

use crate::error::{ExtractError, ExtractErrorKind};

/// One entry of an artifact's symbol table.
///
/// Created transiently per output line and consumed by classification;
/// nothing downstream retains records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Address of the definition. Undefined references have none.
    pub address: Option<u64>,
    /// Raw one-character type code as printed by the tool.
    pub type_code: char,
    /// Symbol name.
    pub name: String,
}

/// Parses one line of tool output into a [`SymbolRecord`].
///
/// `number` is the 1-based line number, used only for error reporting.
pub(crate) fn parse_line(
    line: &str,
    number: usize,
) -> Result<SymbolRecord, ExtractError> {
    let malformed = || {
        ExtractError::new(ExtractErrorKind::MalformedLine {
            number,
            line: line.to_string(),
        })
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let (address, code, name) = match fields.as_slice() {
        [address, code, name] => {
            let address =
                u64::from_str_radix(address, 16).map_err(|_| malformed())?;
            (Some(address), *code, *name)
        }
        [code, name] => (None, *code, *name),
        _ => return Err(malformed()),
    };

    let mut chars = code.chars();
    let type_code = chars.next().ok_or_else(malformed)?;
    if chars.next().is_some() {
        // Two fields where the first is not a lone type code is most likely
        // an address/name line with the code column missing.
        return Err(malformed());
    }

    Ok(SymbolRecord {
        address,
        type_code,
        name: name.to_string(),
    })
}
