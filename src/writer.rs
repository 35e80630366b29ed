//! Markdown writer for the document tree.
//!
//! Emission is looked up by `Node::node_type()` in a handler table, so
//! constructs can install their own rules with [`MarkdownWriter::extend`].

use std::collections::HashMap;

use crate::config::AbbreviationOptions;
use crate::mdast::Node;

pub mod abbreviations;

/// Appends the markdown for `node` to `out`.
pub type Handler = fn(&MarkdownWriter, &Node, &mut String);

pub struct MarkdownWriter {
    handlers: HashMap<&'static str, Handler>,
    options: AbbreviationOptions,
}

impl MarkdownWriter {
    /// A writer with handlers for the core node types only.
    pub fn new(options: AbbreviationOptions) -> Self {
        let mut writer = Self {
            handlers: HashMap::new(),
            options,
        };
        writer.extend(default_handlers());
        writer
    }

    /// A writer with core and abbreviation handlers installed.
    pub fn with_abbreviations(options: AbbreviationOptions) -> Self {
        let mut writer = Self::new(options);
        writer.extend(abbreviations::handlers());
        writer
    }

    /// Install handlers, replacing any existing rule for the same node type.
    pub fn extend(&mut self, handlers: impl IntoIterator<Item = (&'static str, Handler)>) {
        self.handlers.extend(handlers);
    }

    pub fn options(&self) -> &AbbreviationOptions {
        &self.options
    }

    /// Serialize a whole tree. Non-empty output ends with one newline.
    pub fn write(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    pub fn write_node(&self, node: &Node, out: &mut String) {
        match self.handlers.get(node.node_type()) {
            Some(handler) => handler(self, node, out),
            None => {
                log::warn!("No writer handler for {:?}, writing children", node.node_type());
                self.write_children(node.children().unwrap_or_default(), out);
            }
        }
    }

    pub fn write_children(&self, children: &[Node], out: &mut String) {
        for child in children {
            self.write_node(child, out);
        }
    }
}

fn default_handlers() -> Vec<(&'static str, Handler)> {
    vec![
        ("root", write_root as Handler),
        ("paragraph", write_paragraph),
        ("heading", write_heading),
        ("text", write_text),
        ("emphasis", write_emphasis),
        ("strong", write_strong),
        ("inlineCode", write_inline_code),
        ("code", write_code),
    ]
}

/// Flow children are separated by one blank line.
fn write_root(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    let children = node.children().unwrap_or_default();
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        writer.write_node(child, out);
    }
}

fn write_paragraph(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    writer.write_children(node.children().unwrap_or_default(), out);
}

fn write_heading(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    let Node::Heading(heading) = node else {
        return;
    };
    out.push_str(&"#".repeat(usize::from(heading.depth)));
    if !heading.children.is_empty() {
        out.push(' ');
        writer.write_children(&heading.children, out);
    }
}

fn write_text(_: &MarkdownWriter, node: &Node, out: &mut String) {
    if let Node::Text(text) = node {
        out.push_str(&text.value);
    }
}

fn write_emphasis(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    out.push('*');
    writer.write_children(node.children().unwrap_or_default(), out);
    out.push('*');
}

fn write_strong(writer: &MarkdownWriter, node: &Node, out: &mut String) {
    out.push_str("**");
    writer.write_children(node.children().unwrap_or_default(), out);
    out.push_str("**");
}

/// Longest run of `ch` in `text`.
fn longest_run(text: &str, ch: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == ch {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn write_inline_code(_: &MarkdownWriter, node: &Node, out: &mut String) {
    let Node::InlineCode(code) = node else {
        return;
    };
    // Shortest backtick run that does not occur in the content
    let mut ticks = 1;
    while code
        .value
        .split(|c| c != '`')
        .any(|run| run.len() == ticks)
    {
        ticks += 1;
    }
    let marker = "`".repeat(ticks);
    out.push_str(&marker);
    out.push_str(&code.value);
    out.push_str(&marker);
}

fn write_code(_: &MarkdownWriter, node: &Node, out: &mut String) {
    let Node::Code(code) = node else {
        return;
    };
    let fence = "`".repeat(3.max(longest_run(&code.value, '`') + 1));
    out.push_str(&fence);
    if let Some(lang) = &code.lang {
        out.push_str(lang);
        if let Some(meta) = &code.meta {
            out.push(' ');
            out.push_str(meta);
        }
    }
    out.push('\n');
    if !code.value.is_empty() {
        out.push_str(&code.value);
        out.push('\n');
    }
    out.push_str(&fence);
}
