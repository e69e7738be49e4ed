//! Buffer snapshot: line access and word-boundary queries.

use tower_lsp::lsp_types::{Position, Range};

use super::util::{byte_to_utf16_col, ident_end, ident_start, utf16_col_to_byte};

/// An identifier token and the range it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub range: Range,
}

/// Immutable snapshot of one open shader source.
#[derive(Clone, Debug)]
pub struct Document {
    source: String,
    /// Precomputed line start byte offsets.
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = compute_line_starts(&source);
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Content of line `n` without its terminator.
    pub fn line(&self, n: u32) -> Option<&str> {
        let start = *self.line_starts.get(n as usize)?;
        let end = self
            .line_starts
            .get(n as usize + 1)
            .map_or(self.source.len(), |&next| next - 1);
        let line = &self.source[start..end];
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// The identifier touching `pos`, on either side of the cursor.
    pub fn word_at(&self, pos: Position) -> Option<Word> {
        let line = self.line(pos.line)?;
        let offset = utf16_col_to_byte(line, pos.character);
        let start = ident_start(line, offset);
        let end = ident_end(line, offset);
        if start == end {
            return None;
        }
        Some(self.word(pos.line, line, start, end))
    }

    /// The identifier run ending at the cursor. Empty when the cursor
    /// does not follow an identifier character.
    pub fn word_until(&self, pos: Position) -> Word {
        let Some(line) = self.line(pos.line) else {
            return Word {
                text: String::new(),
                range: Range::new(pos, pos),
            };
        };
        let offset = utf16_col_to_byte(line, pos.character);
        self.word(pos.line, line, ident_start(line, offset), offset)
    }

    /// Range a completion replaces: the identifier run before the cursor
    /// joined with the run after it.
    pub fn completion_range(&self, pos: Position) -> Range {
        let Some(line) = self.line(pos.line) else {
            return Range::new(pos, pos);
        };
        let offset = utf16_col_to_byte(line, pos.character);
        self.word(pos.line, line, ident_start(line, offset), ident_end(line, offset))
            .range
    }

    fn word(&self, line_no: u32, line: &str, start: usize, end: usize) -> Word {
        Word {
            text: line[start..end].to_string(),
            range: Range::new(
                Position::new(line_no, byte_to_utf16_col(line, start)),
                Position::new(line_no, byte_to_utf16_col(line, end)),
            ),
        }
    }
}

/// Compute byte offsets of each line start in the source.
pub(super) fn compute_line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
