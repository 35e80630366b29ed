//! Writer rules for abbreviation definitions and references.

use super::{Handler, MarkdownWriter};
use crate::mdast::Node;

pub fn handlers() -> Vec<(&'static str, Handler)> {
    vec![
        ("abbrDefinition", write_definition as Handler),
        ("abbr", write_reference),
    ]
}

/// `*[identifier]: value`. The space is dropped only when the source
/// omitted it and `preserve_separator` is on.
fn write_definition(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    let Node::AbbrDefinition(def) = node else {
        return;
    };
    out.push_str("*[");
    out.push_str(&def.identifier);
    out.push_str("]:");
    if def.spaced || !writer.options().preserve_separator {
        out.push(' ');
    }
    out.push_str(&def.value);
}

/// References write back their original text, never the expansion.
fn write_reference(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    if let Node::Abbr(abbr) = node {
        writer.write_children(&abbr.data.h_children, out);
    }
}
