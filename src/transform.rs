//! Whole-document abbreviation resolution.
//!
//! Runs after the document tree is complete: definitions may follow the
//! text that uses them, so all of them are collected before any text is
//! rewritten.

use std::collections::HashMap;

use regex::Regex;

use crate::config::{AbbreviationOptions, MatchMode};
use crate::mdast::{Abbr, Node, Position, Text};

/// Identifier → expansion, filled in document order so the last definition wins.
#[derive(Debug, Default)]
pub struct AbbrTable {
    entries: HashMap<String, String>,
}

impl AbbrTable {
    pub fn collect(tree: &Node) -> Self {
        let mut table = Self::default();
        tree.walk(&mut |node| {
            if let Node::AbbrDefinition(def) = node
                && let Some(previous) = table
                    .entries
                    .insert(def.identifier.clone(), def.value.clone())
            {
                log::debug!(
                    "Definition of {:?} overrides earlier expansion {:?}",
                    def.identifier,
                    previous
                );
            }
        });
        table
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Identifiers ordered longest first, ties broken lexically.
    fn identifiers_longest_first(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        identifiers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        identifiers
    }
}

/// Finds identifier occurrences: leftmost first, then the longest
/// identifier at that position.
pub struct AbbrMatcher {
    pattern: Regex,
}

impl AbbrMatcher {
    pub fn new(table: &AbbrTable, mode: MatchMode) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let alternatives: Vec<String> = table
            .identifiers_longest_first()
            .into_iter()
            .map(|identifier| alternative(identifier, mode))
            .collect();
        let source = alternatives.join("|");

        match Regex::new(&source) {
            Ok(pattern) => Some(Self { pattern }),
            Err(e) => {
                log::warn!("Could not build abbreviation matcher: {e}");
                None
            }
        }
    }

    /// Byte ranges of non-overlapping matches in `text`.
    pub fn find_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.pattern.find_iter(text).map(|m| (m.start(), m.end()))
    }
}

fn alternative(identifier: &str, mode: MatchMode) -> String {
    let escaped = regex::escape(identifier);
    match mode {
        MatchMode::Substring => escaped,
        MatchMode::WordBoundary => {
            let starts_word = identifier.chars().next().is_some_and(is_word_char);
            let ends_word = identifier.chars().next_back().is_some_and(is_word_char);
            format!(
                "{}{}{}",
                if starts_word { r"\b" } else { "" },
                escaped,
                if ends_word { r"\b" } else { "" }
            )
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every occurrence of a defined identifier in text nodes with an
/// `Abbr` node carrying the winning expansion.
pub fn resolve_abbreviations(tree: &mut Node, options: &AbbreviationOptions) {
    let table = AbbrTable::collect(tree);
    let Some(matcher) = AbbrMatcher::new(&table, options.matching) else {
        log::debug!("No abbreviation definitions, skipping resolution");
        return;
    };

    log::debug!("Resolving {} abbreviation identifiers", table.len());
    let count = resolve_node(tree, &table, &matcher);
    log::info!("Resolved {} abbreviation references", count);
}

fn resolve_node(node: &mut Node, table: &AbbrTable, matcher: &AbbrMatcher) -> usize {
    let Some(children) = node.children_mut() else {
        return 0;
    };

    let mut count = 0;
    let mut rewritten = Vec::with_capacity(children.len());
    for mut child in children.drain(..) {
        match child {
            Node::Text(text) => {
                let parts = split_text(text, table, matcher);
                count += parts.iter().filter(|n| matches!(n, Node::Abbr(_))).count();
                rewritten.extend(parts);
            }
            _ => {
                count += resolve_node(&mut child, table, matcher);
                rewritten.push(child);
            }
        }
    }
    *children = rewritten;
    count
}

/// Split one text node into text/abbr/text siblings. Positions of the
/// pieces are derived from the original node's start point.
fn split_text(text: Text, table: &AbbrTable, matcher: &AbbrMatcher) -> Vec<Node> {
    let matches: Vec<(usize, usize)> = matcher.find_all(&text.value).collect();
    if matches.is_empty() {
        return vec![Node::Text(text)];
    }

    let start = text.position.map(|p| p.start);
    let piece_position = |from: usize, to: usize| {
        start.map(|point| {
            let begin = point.advance(&text.value[..from]);
            Position::new(begin, begin.advance(&text.value[from..to]))
        })
    };

    let mut nodes = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for (from, to) in matches {
        if from > cursor {
            nodes.push(Node::Text(Text {
                value: text.value[cursor..from].to_string(),
                position: piece_position(cursor, from),
            }));
        }

        let identifier = &text.value[from..to];
        let position = piece_position(from, to);
        match table.get(identifier) {
            Some(value) => nodes.push(Node::Abbr(Abbr::new(identifier, value, position))),
            None => nodes.push(Node::Text(Text {
                value: identifier.to_string(),
                position,
            })),
        }
        cursor = to;
    }
    if cursor < text.value.len() {
        nodes.push(Node::Text(Text {
            value: text.value[cursor..].to_string(),
            position: piece_position(cursor, text.value.len()),
        }));
    }

    nodes
}
