/// Parsing for inline code spans (`code`)
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Try to parse a code span starting at the current position.
/// Returns `(total_len, content, backtick_count)` if successful.
pub fn try_parse_code_span(text: &str) -> Option<(usize, &str, usize)> {
    // Count opening backticks
    let opening_backticks = text.bytes().take_while(|&b| b == b'`').count();
    if opening_backticks == 0 {
        return None;
    }

    let rest = &text[opening_backticks..];

    // Look for matching closing backticks
    let mut pos = 0;
    while pos < rest.len() {
        if rest[pos..].starts_with('`') {
            let closing_backticks = rest[pos..].bytes().take_while(|&b| b == b'`').count();

            if closing_backticks == opening_backticks {
                let code_content = &rest[..pos];
                let total_len = opening_backticks + pos + closing_backticks;
                return Some((total_len, code_content, opening_backticks));
            }
            // Skip these backticks and continue searching
            pos += closing_backticks;
        } else {
            // Move to next character (handle UTF-8 properly)
            pos += rest[pos..].chars().next()?.len_utf8();
        }
    }

    // No matching close found
    None
}

/// Emit a code span node to the builder.
pub fn emit_code_span(builder: &mut GreenNodeBuilder, content: &str, backtick_count: usize) {
    builder.start_node(SyntaxKind::CODE_SPAN.into());

    let marker = "`".repeat(backtick_count);
    builder.token(SyntaxKind::CODE_SPAN_MARKER.into(), &marker);
    if !content.is_empty() {
        builder.token(SyntaxKind::TEXT.into(), content);
    }
    builder.token(SyntaxKind::CODE_SPAN_MARKER.into(), &marker);

    builder.finish_node();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_code_span() {
        assert_eq!(try_parse_code_span("`code`"), Some((6, "code", 1)));
    }

    #[test]
    fn test_parse_code_span_with_backticks() {
        assert_eq!(
            try_parse_code_span("`` `backtick` ``"),
            Some((16, " `backtick` ", 2))
        );
    }

    #[test]
    fn test_parse_code_span_no_close() {
        assert_eq!(try_parse_code_span("`no close"), None);
    }

    #[test]
    fn test_parse_code_span_mismatched_close() {
        assert_eq!(try_parse_code_span("`single``"), None);
    }

    #[test]
    fn test_code_span_with_trailing_text() {
        assert_eq!(try_parse_code_span("`HTML` and more"), Some((6, "HTML", 1)));
    }
}
