//! Typed document tree built from the CST.
//!
//! Nodes serialize to JSON as `{"type": "abbrDefinition", ...}` with
//! camelCase names. A missing `position` is omitted from the output.

use serde::{Deserialize, Serialize};

mod builder;
mod position;

pub use builder::{TreeBuilder, from_tree};
pub use position::{LineIndex, Point, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root(Root),
    Paragraph(Paragraph),
    Heading(Heading),
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    InlineCode(InlineCode),
    Code(Code),
    AbbrDefinition(AbbrDefinition),
    Abbr(Abbr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// One `*[identifier]: value` line as written in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbbrDefinition {
    pub identifier: String,
    pub value: String,
    /// Whether the colon was followed by a space.
    #[serde(default = "default_spaced", skip_serializing_if = "is_spaced")]
    pub spaced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

fn default_spaced() -> bool {
    true
}

fn is_spaced(spaced: &bool) -> bool {
    *spaced
}

/// An occurrence of a defined identifier inside text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abbr {
    pub identifier: String,
    /// Expansion from the winning definition.
    pub value: String,
    pub data: AbbrData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Rendering hint: present as `<abbr title="value">text</abbr>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbbrData {
    pub h_name: String,
    pub h_properties: AbbrProperties,
    pub h_children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbbrProperties {
    pub title: String,
}

impl Abbr {
    pub fn new(display_text: &str, value: &str, position: Option<Position>) -> Self {
        Self {
            identifier: display_text.to_string(),
            value: value.to_string(),
            data: AbbrData {
                h_name: "abbr".to_string(),
                h_properties: AbbrProperties {
                    title: value.to_string(),
                },
                h_children: vec![Node::Text(Text {
                    value: display_text.to_string(),
                    position: None,
                })],
            },
            position,
        }
    }

    /// The literal text matched in the source.
    pub fn display_text(&self) -> String {
        self.data.h_children.iter().map(Node::to_plain_text).collect()
    }
}

impl Node {
    /// The serialized `type` tag of this node.
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::Text(_) => "text",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::InlineCode(_) => "inlineCode",
            Node::Code(_) => "code",
            Node::AbbrDefinition(_) => "abbrDefinition",
            Node::Abbr(_) => "abbr",
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Heading(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Heading(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Root(n) => n.position.as_ref(),
            Node::Paragraph(n) => n.position.as_ref(),
            Node::Heading(n) => n.position.as_ref(),
            Node::Text(n) => n.position.as_ref(),
            Node::Emphasis(n) => n.position.as_ref(),
            Node::Strong(n) => n.position.as_ref(),
            Node::InlineCode(n) => n.position.as_ref(),
            Node::Code(n) => n.position.as_ref(),
            Node::AbbrDefinition(n) => n.position.as_ref(),
            Node::Abbr(n) => n.position.as_ref(),
        }
    }

    fn position_mut(&mut self) -> &mut Option<Position> {
        match self {
            Node::Root(n) => &mut n.position,
            Node::Paragraph(n) => &mut n.position,
            Node::Heading(n) => &mut n.position,
            Node::Text(n) => &mut n.position,
            Node::Emphasis(n) => &mut n.position,
            Node::Strong(n) => &mut n.position,
            Node::InlineCode(n) => &mut n.position,
            Node::Code(n) => &mut n.position,
            Node::AbbrDefinition(n) => &mut n.position,
            Node::Abbr(n) => &mut n.position,
        }
    }

    /// Drop position data from this node and everything below it.
    pub fn remove_position(&mut self) {
        *self.position_mut() = None;
        if let Node::Abbr(abbr) = self {
            abbr.data.h_children.iter_mut().for_each(Node::remove_position);
        }
        if let Some(children) = self.children_mut() {
            children.iter_mut().for_each(Node::remove_position);
        }
    }

    /// Concatenated text content, with references contributing their display text.
    pub fn to_plain_text(&self) -> String {
        match self {
            Node::Text(n) => n.value.clone(),
            Node::InlineCode(n) => n.value.clone(),
            Node::Code(n) => n.value.clone(),
            Node::AbbrDefinition(_) => String::new(),
            Node::Abbr(n) => n.display_text(),
            _ => self
                .children()
                .unwrap_or_default()
                .iter()
                .map(Node::to_plain_text)
                .collect(),
        }
    }

    /// Visit this node and all descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Some(children) = self.children() {
            for child in children {
                child.walk(visit);
            }
        }
    }
}
