//! Source locations for lines and tokens in a CODEOWNERS file.

use serde::Serialize;

/// A location in the decoded file content.
///
/// Line and column are 1-based; the offset is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset from the start of the content.
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based, counted in bytes).
    pub column: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span with the given position and length.
    pub fn new(offset: usize, line: usize, column: usize, length: usize) -> Self {
        Self {
            offset,
            line,
            column,
            length,
        }
    }

    /// Creates a span covering `length` bytes starting `column_offset` bytes
    /// into the line described by `self`.
    pub fn within(&self, column_offset: usize, length: usize) -> Span {
        Span::new(
            self.offset + column_offset,
            self.line,
            self.column + column_offset,
            length,
        )
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 1, 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_span_starts_at_line_one() {
        let span = Span::default();
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 1);
        assert_eq!(span.length, 0);
    }

    #[test]
    fn within_shifts_offset_and_column() {
        let line = Span::new(20, 3, 1, 15);
        let token = line.within(4, 6);
        assert_eq!(token.offset, 24);
        assert_eq!(token.line, 3);
        assert_eq!(token.column, 5);
        assert_eq!(token.length, 6);
    }
}
