//! Syntax kinds and language definition for the Markdown CST.

use rowan::Language;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    WHITESPACE = 0,
    NEWLINE,
    TEXT,
    BLANK_LINE,

    // Abbreviation definitions: *[label]: value
    ABBR_DEFINITION,            // *[HTML]: Hyper Text Markup Language
    ABBR_DEFINITION_LABEL,      // *[HTML]
    ABBR_DEFINITION_MARKER,     // *[ or ] or :
    ABBR_DEFINITION_LABEL_TEXT, // HTML
    ABBR_DEFINITION_VALUE,      // value part
    ABBR_DEFINITION_VALUE_TEXT, // Hyper Text Markup Language

    // Code
    CODE_SPAN,
    CODE_SPAN_MARKER,  // ` or `` or ```
    CODE_FENCE_MARKER, // ``` or ~~~
    CODE_BLOCK,
    CODE_FENCE_OPEN,
    CODE_FENCE_CLOSE,
    CODE_INFO,
    CODE_CONTENT,

    // Inline emphasis
    EMPHASIS,        // *text* or _text_
    STRONG,          // **text** or __text__
    EMPHASIS_MARKER, // * or _
    STRONG_MARKER,   // ** or __

    // Composite nodes
    DOCUMENT,
    PARAGRAPH,

    // Headings
    HEADING,
    HEADING_CONTENT,
    ATX_HEADING_MARKER, // leading #####
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkdownLanguage {}

impl Language for MarkdownLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ATX_HEADING_MARKER as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}
