//! Abbreviation definition AST node wrapper.

use super::ast::support;
use super::{AstNode, SyntaxKind, SyntaxNode};
use rowan::TextRange;

pub struct AbbrDefinition(SyntaxNode);

impl AstNode for AbbrDefinition {
    fn kind() -> SyntaxKind {
        SyntaxKind::ABBR_DEFINITION
    }

    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::ABBR_DEFINITION
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Self(syntax))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl AbbrDefinition {
    /// Extracts the label text exactly as written.
    pub fn label(&self) -> String {
        support::descendant_token(&self.0, SyntaxKind::ABBR_DEFINITION_LABEL_TEXT)
            .map(|token| token.text().to_string())
            .unwrap_or_default()
    }

    /// Extracts the expansion text.
    pub fn value(&self) -> String {
        support::descendant_token(&self.0, SyntaxKind::ABBR_DEFINITION_VALUE_TEXT)
            .map(|token| token.text().to_string())
            .unwrap_or_default()
    }

    /// Source range from the marker to the end of the expansion text.
    pub fn content_range(&self) -> TextRange {
        let range = self.0.text_range();
        match support::descendant_token(&self.0, SyntaxKind::ABBR_DEFINITION_VALUE_TEXT) {
            Some(token) => TextRange::new(range.start(), token.text_range().end()),
            None => range,
        }
    }

    /// Whether the colon is followed by the optional single space.
    pub fn has_space(&self) -> bool {
        support::token(&self.0, SyntaxKind::WHITESPACE).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn first_definition(input: &str) -> AbbrDefinition {
        parse(input, None)
            .descendants()
            .find_map(AbbrDefinition::cast)
            .expect("Should find AbbrDefinition")
    }

    #[test]
    fn test_definition_label_and_value() {
        let def = first_definition("*[HTML]: Hyper Text Markup Language");
        assert_eq!(def.label(), "HTML");
        assert_eq!(def.value(), "Hyper Text Markup Language");
        assert!(def.has_space());
    }

    #[test]
    fn test_definition_without_space() {
        let def = first_definition("*[HTML]:Hyper Text Markup Language\n");
        assert_eq!(def.value(), "Hyper Text Markup Language");
        assert!(!def.has_space());
    }

    #[test]
    fn test_definition_with_punctuation_in_label() {
        let def = first_definition("*[MV(VSL) (E&W)]: Motor Vehicles Regulations");
        assert_eq!(def.label(), "MV(VSL) (E&W)");
    }

    #[test]
    fn test_content_range_excludes_trailing_whitespace() {
        let def = first_definition("*[HTML]: Value  \n");
        assert_eq!(def.value(), "Value");
        assert_eq!(u32::from(def.content_range().end()), 14);
    }
}
