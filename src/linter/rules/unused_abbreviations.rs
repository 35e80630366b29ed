use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::mdast::{self, Node};
use crate::syntax::{AbbrDefinition, AstNode, SyntaxNode};
use crate::transform::resolve_abbreviations;
use std::collections::{HashMap, HashSet};

pub struct UnusedAbbreviationsRule;

impl Rule for UnusedAbbreviationsRule {
    fn name(&self) -> &str {
        "unused-abbreviations"
    }

    fn check(&self, tree: &SyntaxNode, input: &str, config: &Config) -> Vec<Diagnostic> {
        let mut document = mdast::from_tree(tree, false);
        resolve_abbreviations(&mut document, &config.abbreviations);

        let mut used = HashSet::new();
        document.walk(&mut |node| {
            if let Node::Abbr(abbr) = node {
                used.insert(abbr.identifier.clone());
            }
        });

        // Only the winning (last) definition of each identifier is judged
        let mut winners: HashMap<String, SyntaxNode> = HashMap::new();
        for node in tree.descendants() {
            if let Some(def) = AbbrDefinition::cast(node.clone()) {
                winners.insert(def.label(), node);
            }
        }

        let mut diagnostics: Vec<Diagnostic> = winners
            .into_iter()
            .filter(|(label, _)| !used.contains(label))
            .map(|(label, node)| {
                Diagnostic::warning(
                    Location::from_node(&node, input),
                    "unused-abbreviations",
                    format!("Abbreviation '*[{}]' is never used", label),
                )
            })
            .collect();
        diagnostics.sort_by_key(|d| d.location.range.start());
        diagnostics
    }
}
