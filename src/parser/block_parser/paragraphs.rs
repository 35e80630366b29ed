use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::code_blocks::try_parse_fence_open;
use super::headings::try_parse_atx_heading;
use super::utils::{emit_line_tokens, is_blank, split_line_ending};

/// Whether `line` starts a block that may interrupt a paragraph.
///
/// Abbreviation definitions are deliberately absent: like link reference
/// definitions they cannot interrupt a paragraph.
fn interrupts_paragraph(line: &str, fenced_code_blocks: bool) -> bool {
    let (content, _) = split_line_ending(line);
    try_parse_atx_heading(content).is_some()
        || (fenced_code_blocks && try_parse_fence_open(content).is_some())
}

pub(crate) fn try_parse_paragraph(
    lines: &[&str],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
    fenced_code_blocks: bool,
) -> Option<usize> {
    log::debug!("Trying to parse paragraph at position {}", pos);

    let line = *lines.get(pos)?;
    if is_blank(line) {
        return None;
    }

    builder.start_node(SyntaxKind::PARAGRAPH.into());

    emit_line_tokens(builder, line);
    let mut current_pos = pos + 1;

    while current_pos < lines.len() {
        let line = lines[current_pos];
        if is_blank(line) || interrupts_paragraph(line, fenced_code_blocks) {
            break;
        }

        emit_line_tokens(builder, line);
        current_pos += 1;

        log::trace!("Added line to paragraph: {:?}", line);
    }

    builder.finish_node(); // PARAGRAPH

    Some(current_pos)
}
