pub mod config;
pub mod linter;
pub mod mdast;
pub mod parser;
pub mod syntax;
pub mod transform;
pub mod writer;

pub use config::Config;
pub use config::ConfigBuilder;
pub use mdast::Node;
pub use syntax::SyntaxNode;
pub use transform::resolve_abbreviations;

use config::LineEnding;
use writer::MarkdownWriter;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Parses a Markdown document string into a concrete syntax tree.
///
/// # Examples
///
/// ```rust
/// use mdabbr::parse;
///
/// let tree = parse("*[HTML]: Hyper Text Markup Language", None);
/// println!("{:#?}", tree);
/// ```
pub fn parse(input: &str, config: Option<Config>) -> SyntaxNode {
    parser::parse(input, config)
}

/// Parses a document into its typed tree with abbreviation references resolved.
///
/// Definitions anywhere in the document apply to text anywhere in it,
/// including text that precedes the definition.
///
/// # Examples
///
/// ```rust
/// use mdabbr::{Node, parse_document};
///
/// let tree = parse_document("I like HTML\n\n*[HTML]: Hyper Text Markup Language\n", None);
/// assert_eq!(tree.node_type(), "root");
/// ```
pub fn parse_document(input: &str, config: Option<Config>) -> Node {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let normalized_input = input.replace("\r\n", "\n");

    // Step 1: Parse blocks and inlines to create the CST
    let tree = parser::parse(&normalized_input, Some(config.clone()));

    // Step 2: Build the typed document tree
    let mut document = mdast::from_tree(&tree, config.positions);

    // Step 3: Resolve references once every definition is known
    if config.extensions.abbreviations {
        resolve_abbreviations(&mut document, &config.abbreviations);
    }

    document
}

/// Serializes a document tree back to Markdown.
pub fn to_markdown(tree: &Node, config: &Config) -> String {
    MarkdownWriter::with_abbreviations(config.abbreviations.clone()).write(tree)
}

/// Formats a Markdown document by parsing, resolving and writing it back.
///
/// References are written as their original text, so documents in
/// canonical form come back unchanged.
///
/// # Examples
///
/// ```rust
/// use mdabbr::format;
///
/// let input = "I like HTML\n\n*[HTML]: Hyper Text Markup Language\n";
/// assert_eq!(format(input, None), input);
/// ```
pub fn format(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    let line_ending = match config.line_ending {
        Some(LineEnding::Lf) => "\n",
        Some(LineEnding::Crlf) => "\r\n",
        Some(LineEnding::Auto) | None => detect_line_ending(input),
    };

    let document = parse_document(input, Some(config.clone()));
    let out = to_markdown(&document, &config);
    log::info!("Formatted document ({} bytes)", out.len());

    if line_ending == "\r\n" {
        out.replace('\n', "\r\n")
    } else {
        out
    }
}
