use crate::config::Config;
use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use rowan::{GreenNode, GreenNodeBuilder};

mod code_spans;
mod emphasis;

use code_spans::{emit_code_span, try_parse_code_span};
use emphasis::{emit_emphasis, try_parse_emphasis};

/// Parse inline elements from text content.
/// This is a standalone function used by both the main inline parser
/// and by nested contexts like emphasis content.
pub fn parse_inline_text(builder: &mut GreenNodeBuilder, text: &str, config: &Config) {
    log::trace!(
        "Parsing inline text: {:?} ({} bytes)",
        text.chars().take(40).collect::<String>(),
        text.len()
    );
    let mut pos = 0;
    let bytes = text.as_bytes();

    while pos < text.len() {
        // Code spans first: delimiters inside code are literal
        if config.extensions.code_spans
            && bytes[pos] == b'`'
            && let Some((len, content, backtick_count)) = try_parse_code_span(&text[pos..])
        {
            log::debug!(
                "Matched code span at pos {}: {} backticks",
                pos,
                backtick_count
            );
            emit_code_span(builder, content, backtick_count);
            pos += len;
            continue;
        }

        if config.extensions.emphasis
            && (bytes[pos] == b'*' || bytes[pos] == b'_')
            && !is_intraword_underscore(text, pos)
            && let Some((len, inner_text, level, delim_char)) = try_parse_emphasis(&text[pos..])
        {
            log::debug!(
                "Matched emphasis at pos {}: level={}, delim={}",
                pos,
                level,
                delim_char
            );
            emit_emphasis(builder, inner_text, level, delim_char, config);
            pos += len;
            continue;
        }

        // No inline element matched - emit as plain text
        let next_pos = find_next_inline_start(&text[pos..]);
        builder.token(SyntaxKind::TEXT.into(), &text[pos..pos + next_pos]);
        pos += next_pos;
    }
}

/// An underscore preceded by an alphanumeric character cannot open emphasis.
fn is_intraword_underscore(text: &str, pos: usize) -> bool {
    text.as_bytes()[pos] == b'_'
        && text[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
}

/// Find the next position where an inline element might start.
/// Always advances by at least one character.
fn find_next_inline_start(text: &str) -> usize {
    let first_len = text.chars().next().map_or(0, char::len_utf8);
    text[first_len..]
        .find(['`', '*', '_'])
        .map_or(text.len(), |i| i + first_len)
}

/// The InlineParser takes a block-level CST and processes inline elements within text content.
/// It traverses the tree, finds TEXT tokens that need inline parsing, and replaces them
/// with properly parsed inline elements (emphasis, code spans).
pub struct InlineParser {
    root: SyntaxNode,
    config: Config,
}

impl InlineParser {
    pub fn new(root: SyntaxNode, config: Config) -> Self {
        Self { root, config }
    }

    /// Parse inline elements within the block-level CST.
    pub fn parse(self) -> SyntaxNode {
        let green = self.parse_node(&self.root);
        SyntaxNode::new_root(green)
    }

    fn parse_node(&self, node: &SyntaxNode) -> GreenNode {
        let mut builder = GreenNodeBuilder::new();
        self.copy_node_to_builder(&mut builder, node);
        builder.finish()
    }

    /// Copy a node and its children to the builder, recursively parsing inline elements.
    fn copy_node_to_builder(&self, builder: &mut GreenNodeBuilder, node: &SyntaxNode) {
        builder.start_node(node.kind().into());

        for child in node.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Node(n) => {
                    self.copy_node_to_builder(builder, &n);
                }
                rowan::NodeOrToken::Token(t) => {
                    if self.should_parse_inline(&t) {
                        parse_inline_text(builder, t.text(), &self.config);
                    } else {
                        builder.token(t.kind().into(), t.text());
                    }
                }
            }
        }

        builder.finish_node();
    }

    /// Only prose TEXT gets inline parsing; code block content stays verbatim.
    fn should_parse_inline(&self, token: &SyntaxToken) -> bool {
        token.kind() == SyntaxKind::TEXT
            && token.parent().is_some_and(|parent| {
                matches!(
                    parent.kind(),
                    SyntaxKind::PARAGRAPH | SyntaxKind::HEADING_CONTENT
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::block_parser::BlockParser;

    fn find_nodes_by_kind(node: &SyntaxNode, kind: SyntaxKind) -> Vec<String> {
        node.descendants()
            .filter(|child| child.kind() == kind)
            .map(|child| child.to_string())
            .collect()
    }

    fn parse_inline(input: &str) -> SyntaxNode {
        let config = Config::default();
        let block_tree = BlockParser::new(input, &config).parse();
        InlineParser::new(block_tree, config).parse()
    }

    #[test]
    fn test_inline_parser_preserves_text() {
        let input = "This is *plain* text with `code` and **HTML**.\n";
        let tree = parse_inline(input);
        assert_eq!(tree.text().to_string(), input);
    }

    #[test]
    fn test_parse_emphasis_and_strong() {
        let tree = parse_inline("Use *HTML* and **CSS** together.");
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS), vec!["*HTML*"]);
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::STRONG), vec!["**CSS**"]);
    }

    #[test]
    fn test_parse_code_span() {
        let tree = parse_inline("The `HTML` tag.");
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::CODE_SPAN), vec!["`HTML`"]);
    }

    #[test]
    fn test_nested_emphasis_in_strong() {
        let tree = parse_inline("**very *nested* text**");
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::STRONG).len(), 1);
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS), vec!["*nested*"]);
    }

    #[test]
    fn test_heading_content_is_inline_parsed() {
        let tree = parse_inline("# About *HTML*\n");
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS), vec!["*HTML*"]);
    }

    #[test]
    fn test_code_block_content_not_parsed() {
        let tree = parse_inline("```\n*not emphasis*\n```\n");
        assert!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS).is_empty());
    }

    #[test]
    fn test_definition_is_not_inline_parsed() {
        let tree = parse_inline("*[HTML]: *Hyper* Text\n");
        assert!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS).is_empty());
        assert_eq!(find_nodes_by_kind(&tree, SyntaxKind::ABBR_DEFINITION).len(), 1);
    }

    #[test]
    fn test_intraword_underscore_is_literal() {
        let tree = parse_inline("snake_case_name");
        assert!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS).is_empty());
    }

    #[test]
    fn test_extensions_can_be_disabled() {
        let mut config = Config::default();
        config.extensions.emphasis = false;
        config.extensions.code_spans = false;
        let block_tree = BlockParser::new("*a* `b`", &config).parse();
        let tree = InlineParser::new(block_tree, config).parse();
        assert!(find_nodes_by_kind(&tree, SyntaxKind::EMPHASIS).is_empty());
        assert!(find_nodes_by_kind(&tree, SyntaxKind::CODE_SPAN).is_empty());
    }
}
