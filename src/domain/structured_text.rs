//! The CMS rich-text schema: a generic document tree of typed nodes.
//!
//! The wire format is the CMS's `dast` document — every node carries a
//! `type` tag plus kind-specific fields (`level`, `style`, `url`, `marks`,
//! `value`, `children`). The schema is owned externally; decoding here is
//! deliberately forgiving so an unfamiliar node kind degrades to
//! [`Node::Unknown`] instead of failing the whole document.

use serde::{Deserialize, Deserializer};

pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A rich-text field as delivered by the CMS: `{ "value": { … } }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StructuredTextField {
    pub value: DocumentEnvelope,
}

/// The `value` payload: schema marker plus the document root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentEnvelope {
    #[serde(default)]
    pub schema: Option<String>,
    pub document: Node,
}

/// Fieldless node kind, used by override-rule predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    List,
    ListItem,
    Link,
    Span,
    Blockquote,
    Code,
    ThematicBreak,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bulleted,
    Numbered,
}

/// Inline formatting applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    Underline,
    Strikethrough,
    Highlight,
}

/// One element of a document tree. Composite kinds own their children;
/// spans own literal text. Single root, no cycles (the CMS guarantees both;
/// not validated locally).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root { children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    Heading { level: u8, children: Vec<Node> },
    List { style: ListStyle, children: Vec<Node> },
    ListItem { children: Vec<Node> },
    Link { url: String, children: Vec<Node> },
    Span { value: String, marks: Vec<Mark> },
    Blockquote { children: Vec<Node> },
    Code { language: Option<String>, code: String },
    ThematicBreak,
    Unknown { kind: String },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Heading { .. } => NodeKind::Heading,
            Node::List { .. } => NodeKind::List,
            Node::ListItem { .. } => NodeKind::ListItem,
            Node::Link { .. } => NodeKind::Link,
            Node::Span { .. } => NodeKind::Span,
            Node::Blockquote { .. } => NodeKind::Blockquote,
            Node::Code { .. } => NodeKind::Code,
            Node::ThematicBreak => NodeKind::ThematicBreak,
            Node::Unknown { .. } => NodeKind::Unknown,
        }
    }

    /// Child nodes in document order; empty for leaf kinds.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Link { children, .. }
            | Node::Blockquote { children } => children,
            Node::Span { .. } | Node::Code { .. } | Node::ThematicBreak | Node::Unknown { .. } => {
                &[]
            }
        }
    }
}

/// Wire shape shared by every node kind. Decoded first, then narrowed into
/// the typed [`Node`] so unfamiliar kinds and marks degrade instead of
/// erroring.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    level: Option<u8>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    marks: Vec<String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Node::from_raw(RawNode::deserialize(deserializer)?))
    }
}

impl Node {
    fn from_raw(raw: RawNode) -> Node {
        match raw.kind.as_str() {
            "root" => Node::Root {
                children: raw.children,
            },
            "paragraph" => Node::Paragraph {
                children: raw.children,
            },
            "heading" => Node::Heading {
                level: raw
                    .level
                    .unwrap_or(MIN_HEADING_LEVEL)
                    .clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL),
                children: raw.children,
            },
            "list" => Node::List {
                style: match raw.style.as_deref() {
                    Some("numbered") => ListStyle::Numbered,
                    _ => ListStyle::Bulleted,
                },
                children: raw.children,
            },
            "listItem" => Node::ListItem {
                children: raw.children,
            },
            "link" => Node::Link {
                url: raw.url.unwrap_or_default(),
                children: raw.children,
            },
            "span" => Node::Span {
                value: raw.value.unwrap_or_default(),
                marks: raw.marks.iter().filter_map(|mark| parse_mark(mark)).collect(),
            },
            "blockquote" => Node::Blockquote {
                children: raw.children,
            },
            "code" => Node::Code {
                language: raw.language,
                code: raw.code.or(raw.value).unwrap_or_default(),
            },
            "thematicBreak" => Node::ThematicBreak,
            other => Node::Unknown {
                kind: other.to_string(),
            },
        }
    }
}

fn parse_mark(mark: &str) -> Option<Mark> {
    match mark {
        "strong" => Some(Mark::Strong),
        "emphasis" => Some(Mark::Emphasis),
        "code" => Some(Mark::Code),
        "underline" => Some(Mark::Underline),
        "strikethrough" => Some(Mark::Strikethrough),
        "highlight" => Some(Mark::Highlight),
        _ => None,
    }
}
