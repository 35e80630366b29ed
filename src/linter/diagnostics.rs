use rowan::TextRange;

use crate::mdast::LineIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Warning => "warning",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub location: Location,
    pub message: String,
    pub code: String,
}

impl Diagnostic {
    pub fn warning(
        location: Location,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            location,
            message: message.into(),
            code: code.into(),
        }
    }
}

impl Location {
    pub fn from_node(node: &crate::syntax::SyntaxNode, input: &str) -> Self {
        Self::from_range(node.text_range(), input)
    }

    pub fn from_range(range: TextRange, input: &str) -> Self {
        let point = LineIndex::new(input).point(range.start().into());

        Self {
            line: point.line,
            column: point.column,
            range,
        }
    }
}
