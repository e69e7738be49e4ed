//! Call-site scanner: finds the call whose argument list holds the cursor.
//!
//! The scan walks backward from the cursor through a bounded window of
//! lines, counting parentheses and top-level commas. It is purely
//! lexical: parentheses inside comments or string-like text count too.

use tower_lsp::lsp_types::Position;

use super::document::Document;
use super::util::{trailing_identifier, utf16_col_to_byte};

/// Lines above the cursor line the scan may visit.
pub const DEFAULT_LOOKBACK_LINES: u32 = 20;

/// The enclosing call at a cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub function: String,
    /// 0-based index of the argument under the cursor.
    pub active_parameter: u32,
}

/// Scan backward from `pos` for the innermost unmatched `(`.
///
/// Returns `None` when the window (the cursor line plus `lookback` lines
/// above it) holds no unmatched `(`, or when that `(` is not directly
/// preceded by an identifier on its own line.
pub fn find_call_site(doc: &Document, pos: Position, lookback: u32) -> Option<CallSite> {
    let first_line = pos.line.saturating_sub(lookback);
    let mut depth = 0u32;
    let mut commas = 0u32;

    for line_no in (first_line..=pos.line).rev() {
        let line = doc.line(line_no)?;
        let end = if line_no == pos.line {
            utf16_col_to_byte(line, pos.character)
        } else {
            line.len()
        };
        let bytes = line.as_bytes();

        for i in (0..end).rev() {
            match bytes[i] {
                b')' => depth += 1,
                b'(' if depth > 0 => depth -= 1,
                b'(' => {
                    let function = trailing_identifier(&line[..i])?;
                    return Some(CallSite {
                        function: function.to_string(),
                        active_parameter: commas,
                    });
                }
                b',' if depth == 0 => commas += 1,
                _ => {}
            }
        }
    }
    None
}
