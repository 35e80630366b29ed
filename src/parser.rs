//! Parser module containing block and inline parsers.

use crate::config::Config;
use crate::syntax::SyntaxNode;

pub mod block_parser;
pub mod events;
pub mod inline_parser;

// Re-export commonly used types
pub use block_parser::BlockParser;
pub use events::{EventKind, EventLog, TokenSink};
pub use inline_parser::{InlineParser, parse_inline_text};

/// Parses a Markdown document string into a syntax tree.
///
/// This function normalizes line endings and runs both the block parser
/// and inline parser to produce a complete concrete syntax tree (CST).
///
/// # Arguments
///
/// * `input` - The Markdown document content to parse
/// * `config` - Optional configuration. If None, uses default config.
pub fn parse(input: &str, config: Option<Config>) -> SyntaxNode {
    let normalized_input = input.replace("\r\n", "\n");
    let config = config.unwrap_or_default();
    let block_tree = BlockParser::new(&normalized_input, &config).parse();
    InlineParser::new(block_tree, config).parse()
}
