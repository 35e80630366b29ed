use super::utils::{emit_line_tokens, get_fence_count, split_indent, split_line_ending};
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Returns the fence char and run length if `line` opens a fenced code block.
pub(crate) fn try_parse_fence_open(line: &str) -> Option<(char, usize)> {
    let (_, trimmed) = split_indent(line);
    if let Some(count) = get_fence_count(trimmed, '`') {
        // Backtick fences cannot have backticks in the info string
        if trimmed[count..].contains('`') {
            return None;
        }
        Some(('`', count))
    } else {
        get_fence_count(trimmed, '~').map(|count| ('~', count))
    }
}

fn emit_padded(builder: &mut GreenNodeBuilder<'static>, kind: SyntaxKind, text: &str) {
    let inner = text.trim_matches([' ', '\t']);
    if inner.is_empty() {
        if !text.is_empty() {
            builder.token(SyntaxKind::WHITESPACE.into(), text);
        }
        return;
    }
    let start = text.len() - text.trim_start_matches([' ', '\t']).len();
    if start > 0 {
        builder.token(SyntaxKind::WHITESPACE.into(), &text[..start]);
    }
    builder.token(kind.into(), inner);
    if start + inner.len() < text.len() {
        builder.token(SyntaxKind::WHITESPACE.into(), &text[start + inner.len()..]);
    }
}

pub(crate) fn try_parse_fenced_code_block(
    lines: &[&str],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
) -> Option<usize> {
    log::debug!("Trying to parse fenced code block at position {}", pos);

    let line = *lines.get(pos)?;
    let (content, newline) = split_line_ending(line);
    let (fence_char, fence_count) = try_parse_fence_open(content)?;
    let (indent, trimmed) = split_indent(content);

    builder.start_node(SyntaxKind::CODE_BLOCK.into());

    // Opening fence
    builder.start_node(SyntaxKind::CODE_FENCE_OPEN.into());
    if !indent.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), indent);
    }
    builder.token(
        SyntaxKind::CODE_FENCE_MARKER.into(),
        &trimmed[..fence_count],
    );
    emit_padded(builder, SyntaxKind::CODE_INFO, &trimmed[fence_count..]);
    if !newline.is_empty() {
        builder.token(SyntaxKind::NEWLINE.into(), newline);
    }
    builder.finish_node(); // CODE_FENCE_OPEN

    let mut current_pos = pos + 1;
    let mut closing = None;
    let content_start = current_pos;

    while current_pos < lines.len() {
        let (line_content, _) = split_line_ending(lines[current_pos]);
        let (_, trimmed_line) = split_indent(line_content);

        if let Some(closing_count) = get_fence_count(trimmed_line, fence_char)
            && closing_count >= fence_count
            && trimmed_line[closing_count..].trim().is_empty()
        {
            closing = Some(closing_count);
            break;
        }

        current_pos += 1;
    }

    if current_pos > content_start {
        builder.start_node(SyntaxKind::CODE_CONTENT.into());
        for content_line in &lines[content_start..current_pos] {
            emit_line_tokens(builder, content_line);
        }
        builder.finish_node(); // CODE_CONTENT
    }

    if let Some(closing_count) = closing {
        let (line_content, newline) = split_line_ending(lines[current_pos]);
        let (indent, trimmed_line) = split_indent(line_content);

        builder.start_node(SyntaxKind::CODE_FENCE_CLOSE.into());
        if !indent.is_empty() {
            builder.token(SyntaxKind::WHITESPACE.into(), indent);
        }
        builder.token(
            SyntaxKind::CODE_FENCE_MARKER.into(),
            &trimmed_line[..closing_count],
        );
        emit_padded(builder, SyntaxKind::WHITESPACE, &trimmed_line[closing_count..]);
        if !newline.is_empty() {
            builder.token(SyntaxKind::NEWLINE.into(), newline);
        }
        builder.finish_node(); // CODE_FENCE_CLOSE

        current_pos += 1;
    }

    builder.finish_node(); // CODE_BLOCK

    log::debug!(
        "Parsed fenced code block, found_closing: {}",
        closing.is_some()
    );
    Some(current_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxNode;

    fn parse_block(lines: &[&str]) -> (SyntaxNode, Option<usize>) {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::DOCUMENT.into());
        let pos = try_parse_fenced_code_block(lines, 0, &mut builder);
        builder.finish_node();
        (SyntaxNode::new_root(builder.finish()), pos)
    }

    #[test]
    fn test_fence_open_detection() {
        assert_eq!(try_parse_fence_open("```"), Some(('`', 3)));
        assert_eq!(try_parse_fence_open("~~~~ python"), Some(('~', 4)));
        assert_eq!(try_parse_fence_open("``` a`b"), None);
        assert_eq!(try_parse_fence_open("``"), None);
    }

    #[test]
    fn test_closed_code_block() {
        let lines = ["```rust\n", "let x = 1;\n", "```\n", "after\n"];
        let (tree, pos) = parse_block(&lines);
        assert_eq!(pos, Some(3));
        assert_eq!(tree.text().to_string(), "```rust\nlet x = 1;\n```\n");
        let info = tree
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::CODE_INFO)
            .unwrap();
        assert_eq!(info.text(), "rust");
    }

    #[test]
    fn test_unclosed_code_block_runs_to_end() {
        let lines = ["~~~\n", "*[A]: not a definition\n"];
        let (tree, pos) = parse_block(&lines);
        assert_eq!(pos, Some(2));
        assert!(
            tree.descendants()
                .all(|n| n.kind() != SyntaxKind::ABBR_DEFINITION)
        );
    }

    #[test]
    fn test_shorter_fence_does_not_close() {
        let lines = ["````\n", "```\n", "````\n"];
        let (tree, pos) = parse_block(&lines);
        assert_eq!(pos, Some(3));
        let content = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::CODE_CONTENT)
            .unwrap();
        assert_eq!(content.text().to_string(), "```\n");
    }
}
