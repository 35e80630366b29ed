//! ATX heading parsing utilities.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::utils::{split_indent, split_line_ending};

/// Try to parse an ATX heading from line content, returns heading level (1-6) if found.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<usize> {
    let (_, trimmed) = split_indent(content);
    // More than 3 spaces of indentation
    if trimmed.starts_with(' ') {
        return None;
    }

    // Must start with 1-6 # characters
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty() && !after_hashes.starts_with(' ') && !after_hashes.starts_with('\t')
    {
        return None;
    }

    Some(hash_count)
}

/// Emit an ATX heading node for the full line (including its line ending).
pub(crate) fn emit_atx_heading(builder: &mut GreenNodeBuilder<'static>, line: &str, level: usize) {
    let (content, newline) = split_line_ending(line);
    let (indent, trimmed) = split_indent(content);

    builder.start_node(SyntaxKind::HEADING.into());

    if !indent.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), indent);
    }

    // Marker node for the hashes (must be a node containing a token, not just a token)
    builder.start_node(SyntaxKind::ATX_HEADING_MARKER.into());
    builder.token(SyntaxKind::ATX_HEADING_MARKER.into(), &trimmed[..level]);
    builder.finish_node();

    let after_marker = &trimmed[level..];
    let text = after_marker.trim_start_matches([' ', '\t']);
    let leading = &after_marker[..after_marker.len() - text.len()];
    if !leading.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), leading);
    }

    let heading_text = text.trim_end_matches([' ', '\t']);
    let trailing = &text[heading_text.len()..];

    builder.start_node(SyntaxKind::HEADING_CONTENT.into());
    if !heading_text.is_empty() {
        builder.token(SyntaxKind::TEXT.into(), heading_text);
    }
    builder.finish_node();

    if !trailing.is_empty() {
        builder.token(SyntaxKind::WHITESPACE.into(), trailing);
    }
    if !newline.is_empty() {
        builder.token(SyntaxKind::NEWLINE.into(), newline);
    }

    builder.finish_node(); // HEADING
}
