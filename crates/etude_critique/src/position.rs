//! Offset to line/column mapping.

/// A 1-indexed position in a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Convert a byte offset to a 1-indexed line/column position.
///
/// `line` is the number of line breaks before `offset` plus one; `column`
/// is the number of characters since the last line break plus one. Total
/// over any input: offsets past the end are clamped to the end.
pub fn position(text: &str, offset: usize) -> Position {
    let mut offset = offset.min(text.len());
    // Clamp to a char boundary so slicing below cannot panic.
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &text[..offset];
    let line = memchr::memchr_iter(b'\n', before.as_bytes()).count() as u32 + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() as u32 + 1;

    Position { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_text() {
        assert_eq!(position("anything", 0), Position { line: 1, column: 1 });
        assert_eq!(position("", 0), Position { line: 1, column: 1 });
    }

    #[test]
    fn test_after_line_break() {
        assert_eq!(position("ab\ncd", 3), Position { line: 2, column: 1 });
    }

    #[test]
    fn test_middle_of_line() {
        assert_eq!(position("ab\ncd", 5), Position { line: 2, column: 3 });
        assert_eq!(position("ab\ncd", 1), Position { line: 1, column: 2 });
    }

    #[test]
    fn test_offset_at_line_break() {
        // The '\n' itself still belongs to line 1.
        assert_eq!(position("ab\ncd", 2), Position { line: 1, column: 3 });
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(position("ab", 100), Position { line: 1, column: 3 });
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        // "héllo" - é is two bytes but one column.
        let text = "h\u{e9}llo";
        assert_eq!(position(text, 3), Position { line: 1, column: 3 });
    }
}
