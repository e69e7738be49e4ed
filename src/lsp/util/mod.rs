//! LSP utility functions: UTF-16 column conversion and identifier
//! boundaries.
//!
//! LSP positions count columns in UTF-16 code units. Every function here
//! works on a single line of text, so a column never crosses a newline.

pub fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Byte offset within `line` of a UTF-16 column. Columns past the end of
/// the line clamp to its length; a column inside a surrogate pair rounds
/// down to the start of that character.
pub fn utf16_col_to_byte(line: &str, col: u32) -> usize {
    let mut units = 0u32;
    for (i, ch) in line.char_indices() {
        let next = units + ch.len_utf16() as u32;
        if next > col {
            return i;
        }
        units = next;
    }
    line.len()
}

/// UTF-16 column of a byte offset within `line`, clamped to the line.
pub fn byte_to_utf16_col(line: &str, offset: usize) -> u32 {
    let offset = offset.min(line.len());
    line.char_indices()
        .take_while(|(i, _)| *i < offset)
        .map(|(_, ch)| ch.len_utf16() as u32)
        .sum()
}

/// Start of the identifier run that ends at `offset`.
pub fn ident_start(line: &str, offset: usize) -> usize {
    let bytes = line.as_bytes();
    let mut start = offset.min(bytes.len());
    while start > 0 && is_ident_char(bytes[start - 1]) {
        start -= 1;
    }
    start
}

/// End of the identifier run that starts at `offset`.
pub fn ident_end(line: &str, offset: usize) -> usize {
    let bytes = line.as_bytes();
    let mut end = offset.min(bytes.len());
    while end < bytes.len() && is_ident_char(bytes[end]) {
        end += 1;
    }
    end
}

/// The identifier that ends `text`, ignoring trailing whitespace. It must
/// start with a letter or underscore, so leading digits of the run are
/// dropped: `2.0*foo` yields `foo`, `1x` yields `x`, `42` yields nothing.
pub fn trailing_identifier(text: &str) -> Option<&str> {
    let trimmed = text.trim_end();
    let start = ident_start(trimmed, trimmed.len());
    let run = &trimmed[start..];
    let name = run.trim_start_matches(|c: char| c.is_ascii_digit());
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests;
