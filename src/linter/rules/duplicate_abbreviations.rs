use crate::config::Config;
use crate::linter::diagnostics::{Diagnostic, Location};
use crate::linter::rules::Rule;
use crate::syntax::{AbbrDefinition, AstNode, SyntaxNode};
use std::collections::HashMap;

pub struct DuplicateAbbreviationsRule;

impl Rule for DuplicateAbbreviationsRule {
    fn name(&self) -> &str {
        "duplicate-abbreviations"
    }

    fn check(&self, tree: &SyntaxNode, input: &str, _config: &Config) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        // Most recent definition per identifier; a later one overrides it
        let mut latest: HashMap<String, SyntaxNode> = HashMap::new();

        for node in tree.descendants() {
            let Some(def) = AbbrDefinition::cast(node.clone()) else {
                continue;
            };
            let label = def.label();

            if let Some(previous) = latest.insert(label.clone(), node.clone()) {
                let location = Location::from_node(&node, input);
                let previous_location = Location::from_node(&previous, input);

                diagnostics.push(Diagnostic::warning(
                    location,
                    "duplicate-abbreviations",
                    format!(
                        "Duplicate abbreviation '*[{}]' overrides definition at line {}",
                        label, previous_location.line
                    ),
                ));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_and_lint(input: &str) -> Vec<Diagnostic> {
        let config = Config::default();
        let tree = crate::parse(input, Some(config.clone()));

        let rule = DuplicateAbbreviationsRule;
        rule.check(&tree, input, &config)
    }

    #[test]
    fn test_no_duplicates() {
        let input = "*[HTML]: Hyper Text Markup Language\n*[CSS]: Cascading Style Sheets\n";
        assert!(parse_and_lint(input).is_empty());
    }

    #[test]
    fn test_duplicate_names_overridden_line() {
        let input = "*[HTML]: Hootin Tootin Magic Lingo\n\n*[HTML]: Hyper Text Markup Language\n";
        let diagnostics = parse_and_lint(input);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "duplicate-abbreviations");
        assert_eq!(diagnostics[0].location.line, 3);
        assert!(diagnostics[0].message.contains("*[HTML]"));
        assert!(diagnostics[0].message.contains("line 1"));
    }

    #[test]
    fn test_each_override_points_at_previous() {
        let input = "*[A]: one\n*[A]: two\n*[A]: three\n";
        let diagnostics = parse_and_lint(input);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("line 1"));
        assert!(diagnostics[1].message.contains("line 2"));
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        let input = "*[html]: lower\n*[HTML]: upper\n";
        assert!(parse_and_lint(input).is_empty());
    }
}
