//! Builds the typed document tree from the CST.

use rowan::{NodeOrToken, TextRange};

use super::{
    AbbrDefinition, Code, Emphasis, Heading, InlineCode, LineIndex, Node, Paragraph, Position,
    Root, Strong, Text,
};
use crate::syntax::{self, AstNode, SyntaxElement, SyntaxKind, SyntaxNode};

/// Build a document tree from a parsed CST. With `positions` off every node
/// carries `position: None`.
pub fn from_tree(root: &SyntaxNode, positions: bool) -> Node {
    let text = root.text().to_string();
    let builder = TreeBuilder::new(&text, positions);
    builder.build(root)
}

pub struct TreeBuilder<'a> {
    index: Option<LineIndex<'a>>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(text: &'a str, positions: bool) -> Self {
        Self {
            index: positions.then(|| LineIndex::new(text)),
        }
    }

    pub fn build(&self, root: &SyntaxNode) -> Node {
        let children = root.children().filter_map(|n| self.block(&n)).collect();
        Node::Root(Root {
            children,
            position: self.position(root.text_range()),
        })
    }

    fn position(&self, range: TextRange) -> Option<Position> {
        self.index
            .as_ref()
            .map(|index| index.position(range.start().into(), range.end().into()))
    }

    fn block(&self, node: &SyntaxNode) -> Option<Node> {
        match node.kind() {
            SyntaxKind::PARAGRAPH => Some(Node::Paragraph(Paragraph {
                children: self.inlines(node),
                position: self.position(content_range(node)),
            })),
            SyntaxKind::HEADING => Some(self.heading(node)),
            SyntaxKind::CODE_BLOCK => Some(self.code(node)),
            SyntaxKind::ABBR_DEFINITION => {
                let def = syntax::AbbrDefinition::cast(node.clone())?;
                log::trace!("Building definition for {:?}", def.label());
                Some(Node::AbbrDefinition(AbbrDefinition {
                    identifier: def.label(),
                    value: def.value(),
                    spaced: def.has_space(),
                    position: self.position(def.content_range()),
                }))
            }
            SyntaxKind::BLANK_LINE => None,
            kind => {
                log::warn!("No document node for block {:?}", kind);
                None
            }
        }
    }

    fn heading(&self, node: &SyntaxNode) -> Node {
        let depth = node
            .children()
            .find(|n| n.kind() == SyntaxKind::ATX_HEADING_MARKER)
            .map_or(1, |marker| usize::from(marker.text().len()));
        let children = node
            .children()
            .find(|n| n.kind() == SyntaxKind::HEADING_CONTENT)
            .map(|content| self.inlines(&content))
            .unwrap_or_default();

        Node::Heading(Heading {
            depth: u8::try_from(depth).unwrap_or(6),
            children,
            position: self.position(content_range(node)),
        })
    }

    fn code(&self, node: &SyntaxNode) -> Node {
        let info = node
            .descendants_with_tokens()
            .filter_map(SyntaxElement::into_token)
            .find(|t| t.kind() == SyntaxKind::CODE_INFO)
            .map(|t| t.text().to_string())
            .unwrap_or_default();
        let (lang, meta) = match info.split_once(char::is_whitespace) {
            Some((lang, meta)) => (Some(lang.to_string()), Some(meta.trim().to_string())),
            None if info.is_empty() => (None, None),
            None => (Some(info.clone()), None),
        };
        let meta = meta.filter(|m| !m.is_empty());

        let content = node
            .children()
            .find(|n| n.kind() == SyntaxKind::CODE_CONTENT)
            .map(|n| n.text().to_string())
            .unwrap_or_default();
        let value = content.strip_suffix('\n').unwrap_or(&content).to_string();

        Node::Code(Code {
            lang,
            meta,
            value,
            position: self.position(content_range(node)),
        })
    }

    /// Inline children of a paragraph or heading content node. Runs of
    /// TEXT/NEWLINE tokens merge into a single Text node.
    fn inlines(&self, node: &SyntaxNode) -> Vec<Node> {
        let mut elements: Vec<SyntaxElement> = node.children_with_tokens().collect();
        while elements
            .last()
            .is_some_and(|e| e.kind() == SyntaxKind::NEWLINE)
        {
            elements.pop();
        }

        let mut children = Vec::new();
        let mut pending: Option<(String, TextRange)> = None;

        for element in elements {
            match element {
                NodeOrToken::Token(token)
                    if matches!(token.kind(), SyntaxKind::TEXT | SyntaxKind::NEWLINE) =>
                {
                    match &mut pending {
                        Some((value, range)) => {
                            value.push_str(token.text());
                            *range = range.cover(token.text_range());
                        }
                        None => pending = Some((token.text().to_string(), token.text_range())),
                    }
                }
                NodeOrToken::Token(token) => {
                    log::trace!("Skipping inline token {:?}", token.kind());
                }
                NodeOrToken::Node(child) => {
                    if let Some((value, range)) = pending.take() {
                        children.push(self.text(value, range));
                    }
                    if let Some(inline) = self.inline(&child) {
                        children.push(inline);
                    }
                }
            }
        }
        if let Some((value, range)) = pending {
            children.push(self.text(value, range));
        }

        children
    }

    fn text(&self, value: String, range: TextRange) -> Node {
        Node::Text(Text {
            value,
            position: self.position(range),
        })
    }

    fn inline(&self, node: &SyntaxNode) -> Option<Node> {
        let position = self.position(node.text_range());
        match node.kind() {
            SyntaxKind::EMPHASIS => Some(Node::Emphasis(Emphasis {
                children: self.inlines(node),
                position,
            })),
            SyntaxKind::STRONG => Some(Node::Strong(Strong {
                children: self.inlines(node),
                position,
            })),
            SyntaxKind::CODE_SPAN => {
                let value = node
                    .children_with_tokens()
                    .filter_map(SyntaxElement::into_token)
                    .filter(|t| t.kind() == SyntaxKind::TEXT)
                    .map(|t| t.text().to_string())
                    .collect();
                Some(Node::InlineCode(InlineCode { value, position }))
            }
            kind => {
                log::warn!("No document node for inline {:?}", kind);
                None
            }
        }
    }
}

/// Node range without trailing NEWLINE tokens.
fn content_range(node: &SyntaxNode) -> TextRange {
    let range = node.text_range();
    let trailing: u32 = node
        .descendants_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .collect::<Vec<_>>()
        .iter()
        .rev()
        .take_while(|t| t.kind() == SyntaxKind::NEWLINE)
        .map(|t| u32::from(t.text_range().len()))
        .sum();
    TextRange::new(range.start(), range.end() - rowan::TextSize::from(trailing))
}
