//! Shared utilities for block parsing.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Split a line from `split_inclusive('\n')` into its content and line ending.
pub(crate) fn split_line_ending(line: &str) -> (&str, &str) {
    match line.strip_suffix('\n') {
        Some(content) => (content, "\n"),
        None => (line, ""),
    }
}

/// Helper to emit a line's text and newline tokens separately.
pub(crate) fn emit_line_tokens(builder: &mut GreenNodeBuilder<'static>, line: &str) {
    let (text, newline) = split_line_ending(line);
    if !text.is_empty() {
        builder.token(SyntaxKind::TEXT.into(), text);
    }
    if !newline.is_empty() {
        builder.token(SyntaxKind::NEWLINE.into(), newline);
    }
}

/// Split up to 3 leading spaces off a line. Returns `(indent, rest)`.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let spaces = line.bytes().take_while(|&b| b == b' ').count().min(3);
    line.split_at(spaces)
}

/// Count the run of `fence_char` at the start of `line`.
pub(crate) fn get_fence_count(line: &str, fence_char: char) -> Option<usize> {
    let count = line.chars().take_while(|&c| c == fence_char).count();
    if count >= 3 { Some(count) } else { None }
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_ending() {
        assert_eq!(split_line_ending("abc\n"), ("abc", "\n"));
        assert_eq!(split_line_ending("abc"), ("abc", ""));
        assert_eq!(split_line_ending("\n"), ("", "\n"));
    }

    #[test]
    fn test_split_indent() {
        assert_eq!(split_indent("   # x"), ("   ", "# x"));
        assert_eq!(split_indent("     x"), ("   ", "  x"));
        assert_eq!(split_indent("x"), ("", "x"));
    }

    #[test]
    fn test_get_fence_count() {
        assert_eq!(get_fence_count("```rust", '`'), Some(3));
        assert_eq!(get_fence_count("~~~~", '~'), Some(4));
        assert_eq!(get_fence_count("``", '`'), None);
    }
}
