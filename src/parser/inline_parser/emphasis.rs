//! Parsing for emphasis (*italic*, **bold**)
//!
//! Rules:
//! - Opening and closing runs use the same character and the same length (1 or 2)
//! - Content cannot be empty and cannot start or end with whitespace
//! - Runs of three or more delimiters are left as literal text
//! - A closing `_` run cannot be followed by an alphanumeric character

use crate::config::Config;
use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

fn run_length(bytes: &[u8], start: usize, delim: u8) -> usize {
    bytes[start..].iter().take_while(|&&b| b == delim).count()
}

/// Try to parse emphasis or strong emphasis at the start of `text`.
/// Returns: (total_len, inner_content, level, delimiter)
pub fn try_parse_emphasis(text: &str) -> Option<(usize, &str, usize, char)> {
    let bytes = text.as_bytes();
    let delim = *bytes.first()?;
    if delim != b'*' && delim != b'_' {
        return None;
    }

    let level = run_length(bytes, 0, delim);
    if level > 2 {
        return None;
    }

    // Content cannot start with whitespace
    let after_open = text[level..].chars().next()?;
    if after_open.is_whitespace() {
        return None;
    }

    let mut pos = level;
    while pos < bytes.len() {
        if bytes[pos] != delim {
            pos += text[pos..].chars().next()?.len_utf8();
            continue;
        }

        let run = run_length(bytes, pos, delim);
        let before_close = text[..pos].chars().next_back();
        let after_close = text[pos + run..].chars().next();

        let closes = run == level
            && pos > level
            && !before_close.is_some_and(char::is_whitespace)
            && !(delim == b'_' && after_close.is_some_and(char::is_alphanumeric));

        if closes {
            let inner = &text[level..pos];
            return Some((pos + run, inner, level, delim as char));
        }
        pos += run;
    }

    None
}

/// Emit an emphasis or strong node, parsing the content recursively.
pub fn emit_emphasis(
    builder: &mut GreenNodeBuilder,
    inner_text: &str,
    level: usize,
    delim_char: char,
    config: &Config,
) {
    let (node_kind, marker_kind) = if level == 2 {
        (SyntaxKind::STRONG, SyntaxKind::STRONG_MARKER)
    } else {
        (SyntaxKind::EMPHASIS, SyntaxKind::EMPHASIS_MARKER)
    };
    let marker = delim_char.to_string().repeat(level);

    builder.start_node(node_kind.into());
    builder.token(marker_kind.into(), &marker);
    super::parse_inline_text(builder, inner_text, config);
    builder.token(marker_kind.into(), &marker);
    builder.finish_node();
}
