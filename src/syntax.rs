//! Concrete syntax tree types and typed wrappers.

mod abbreviations;
mod ast;
mod kind;

pub use abbreviations::AbbrDefinition;
pub use ast::AstNode;
pub use kind::{MarkdownLanguage, SyntaxKind};

pub type SyntaxNode = rowan::SyntaxNode<MarkdownLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MarkdownLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MarkdownLanguage>;
