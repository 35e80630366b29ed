//! Abbreviation definition parsing.
//!
//! Abbreviation definitions have the form:
//! ```markdown
//! *[HTML]: Hyper Text Markup Language
//! *[HTML]:Hyper Text Markup Language
//! ```
//!
//! Rules:
//! - The label is everything between `*[` and the first `]`; it cannot be empty
//! - The label is followed immediately by `:` and at most one optional space
//! - The value runs to the end of the physical line and cannot be blank
//! - Trailing spaces and tabs after the value are not part of it

use crate::parser::events::TokenSink;
use crate::syntax::SyntaxKind;

/// Scanner states, in the order a well-formed definition passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    SawMarker,
    SawOpenLabel,
    InLabel,
    SawCloseLabel,
    SawColon,
    SawSpace,
    InValue,
}

/// A successfully scanned definition. All slices borrow from the scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbrDefinitionMatch<'a> {
    pub label: &'a str,
    pub has_space: bool,
    pub value: &'a str,
    /// Spaces and tabs between the value and the end of the line.
    pub trailing: &'a str,
    /// Bytes consumed, not counting the line ending.
    pub len: usize,
}

/// Try to scan an abbreviation definition at the start of `text`.
///
/// Only the first physical line of `text` is considered. Returns `None` on
/// any deviation from the syntax; nothing is consumed in that case.
pub fn try_parse_abbreviation_definition(text: &str) -> Option<AbbrDefinitionMatch<'_>> {
    let mut state = State::Start;
    let mut label_start = 0;
    let mut label_end = 0;
    let mut value_start = 0;
    let mut end = text.len();

    for (i, ch) in text.char_indices() {
        if ch == '\n' || ch == '\r' {
            end = i;
            break;
        }

        let next = match (state, ch) {
            (State::Start, '*') => Some(State::SawMarker),
            (State::SawMarker, '[') => {
                label_start = i + 1;
                Some(State::SawOpenLabel)
            }
            // Empty label
            (State::SawOpenLabel, ']') => None,
            (State::SawOpenLabel, _) | (State::InLabel, _) if ch != ']' => Some(State::InLabel),
            (State::InLabel, ']') => {
                label_end = i;
                Some(State::SawCloseLabel)
            }
            (State::SawCloseLabel, ':') => Some(State::SawColon),
            (State::SawColon, ' ') => {
                value_start = i + 1;
                Some(State::SawSpace)
            }
            (State::SawColon, _) => {
                value_start = i;
                Some(State::InValue)
            }
            (State::SawSpace, _) | (State::InValue, _) => Some(State::InValue),
            _ => None,
        };

        match next {
            Some(next) => state = next,
            None => {
                log::trace!(
                    "Abbreviation definition rejected at byte {} ({:?}) in state {:?}",
                    i,
                    ch,
                    state
                );
                return None;
            }
        }
    }

    if state != State::InValue {
        log::trace!("Abbreviation definition ended early in state {:?}", state);
        return None;
    }

    let raw_value = &text[value_start..end];
    let value = raw_value.trim_end_matches([' ', '\t']);
    if value.trim().is_empty() {
        return None;
    }

    Some(AbbrDefinitionMatch {
        label: &text[label_start..label_end],
        has_space: value_start > label_end + 2,
        value,
        trailing: &raw_value[value.len()..],
        len: end,
    })
}

/// Emit the token stream for a scanned definition.
///
/// The whole construct is emitted at once, so a sink never observes a
/// partial definition.
pub fn emit_abbreviation_definition<S: TokenSink + ?Sized>(
    sink: &mut S,
    def: &AbbrDefinitionMatch<'_>,
) {
    sink.enter(SyntaxKind::ABBR_DEFINITION);

    sink.enter(SyntaxKind::ABBR_DEFINITION_LABEL);
    sink.token(SyntaxKind::ABBR_DEFINITION_MARKER, "*[");
    sink.token(SyntaxKind::ABBR_DEFINITION_LABEL_TEXT, def.label);
    sink.token(SyntaxKind::ABBR_DEFINITION_MARKER, "]");
    sink.exit();

    sink.token(SyntaxKind::ABBR_DEFINITION_MARKER, ":");
    if def.has_space {
        sink.token(SyntaxKind::WHITESPACE, " ");
    }

    sink.enter(SyntaxKind::ABBR_DEFINITION_VALUE);
    sink.token(SyntaxKind::ABBR_DEFINITION_VALUE_TEXT, def.value);
    if !def.trailing.is_empty() {
        sink.token(SyntaxKind::WHITESPACE, def.trailing);
    }
    sink.exit();

    sink.exit();
}

/// Try to parse a definition occupying the line at `pos`.
/// Returns the next line position on success.
pub(crate) fn try_parse_abbreviation_definition_line<S: TokenSink + ?Sized>(
    lines: &[&str],
    pos: usize,
    sink: &mut S,
) -> Option<usize> {
    let line = *lines.get(pos)?;
    let (content, newline) = super::utils::split_line_ending(line);

    let indent = content.len() - content.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let def = try_parse_abbreviation_definition(&content[indent..])?;
    log::debug!(
        "Parsed abbreviation definition at line {}: [{}]",
        pos + 1,
        def.label
    );

    if indent > 0 {
        sink.token(SyntaxKind::WHITESPACE, &content[..indent]);
    }
    emit_abbreviation_definition(sink, &def);
    if !newline.is_empty() {
        sink.token(SyntaxKind::NEWLINE, newline);
    }

    Some(pos + 1)
}
