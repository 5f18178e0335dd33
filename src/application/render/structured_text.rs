//! Structured-text renderer: walks a CMS document tree and emits HTML.
//!
//! Traversal is strictly bottom-up (post-order): children are fully rendered
//! before a composite node's own renderer runs, and sibling order is
//! preserved, so callers can rely on a node's render function seeing its
//! finished children. Override rules are consulted in declaration order per
//! node; the first matching predicate wins, and the per-kind defaults apply
//! when none match. Every node is rendered exactly once.

use crate::application::render::types::RenderError;
use crate::domain::structured_text::{ListStyle, Mark, Node, NodeKind};
use crate::util::html::{escape_attr, escape_text};

/// Everything an override rule sees for one node: the node itself, its fully
/// rendered children, and a key that stays stable across re-renders of the
/// same tree (derived from the node's path from the root).
pub struct RuleContext<'a> {
    pub node: &'a Node,
    pub children_html: &'a str,
    pub key: &'a str,
}

type Predicate = dyn Fn(&Node) -> bool + Send + Sync;
type RenderFn = dyn Fn(&RuleContext<'_>) -> Result<String, RenderError> + Send + Sync;

/// An override rule: a predicate over node kinds paired with a render
/// function that replaces the default rendering for matching nodes.
pub struct NodeRule {
    matches: Box<Predicate>,
    render: Box<RenderFn>,
}

impl NodeRule {
    pub fn new<M, R>(matches: M, render: R) -> Self
    where
        M: Fn(&Node) -> bool + Send + Sync + 'static,
        R: Fn(&RuleContext<'_>) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        Self {
            matches: Box::new(matches),
            render: Box::new(render),
        }
    }

    /// Rule matching every node of one kind. The observed schema only ever
    /// needs kind matching; `new` keeps the general predicate form open.
    pub fn for_kind<R>(kind: NodeKind, render: R) -> Self
    where
        R: Fn(&RuleContext<'_>) -> Result<String, RenderError> + Send + Sync + 'static,
    {
        Self::new(move |node| node.kind() == kind, render)
    }
}

/// The rule the FAQ pages install: intercept every heading and emit the
/// presentational text component. The structural tag and the variant class
/// always carry the same numeral (`h3` / `text-heading3`), for every level
/// 1 through 6.
pub fn heading_rule() -> NodeRule {
    NodeRule::for_kind(NodeKind::Heading, |ctx| {
        let Node::Heading { level, .. } = ctx.node else {
            return Err(RenderError::Document {
                message: "heading rule matched a non-heading node".to_string(),
            });
        };
        Ok(format!(
            "<h{level} class=\"text text-heading{level}\" data-key=\"{key}\">{children}</h{level}>",
            key = escape_attr(ctx.key),
            children = ctx.children_html,
        ))
    })
}

/// Render a whole document tree. Pure: same tree and rules, same output.
pub fn render_document(root: &Node, rules: &[NodeRule]) -> Result<String, RenderError> {
    render_node(root, rules, "t0")
}

fn render_node(node: &Node, rules: &[NodeRule], key: &str) -> Result<String, RenderError> {
    let mut children_html = String::new();
    for (index, child) in node.children().iter().enumerate() {
        let child_key = format!("{key}-{index}");
        children_html.push_str(&render_node(child, rules, &child_key)?);
    }

    let ctx = RuleContext {
        node,
        children_html: &children_html,
        key,
    };

    for rule in rules {
        if (rule.matches)(node) {
            return (rule.render)(&ctx);
        }
    }

    default_render(&ctx)
}

fn default_render(ctx: &RuleContext<'_>) -> Result<String, RenderError> {
    let html = match ctx.node {
        Node::Root { .. } => ctx.children_html.to_string(),
        Node::Paragraph { .. } => format!("<p>{}</p>", ctx.children_html),
        Node::Heading { level, .. } => {
            format!("<h{level}>{children}</h{level}>", children = ctx.children_html)
        }
        Node::List { style, .. } => match style {
            ListStyle::Bulleted => format!("<ul>{}</ul>", ctx.children_html),
            ListStyle::Numbered => format!("<ol>{}</ol>", ctx.children_html),
        },
        Node::ListItem { .. } => format!("<li>{}</li>", ctx.children_html),
        Node::Link { url, .. } => format!(
            "<a href=\"{href}\">{children}</a>",
            href = escape_attr(url),
            children = ctx.children_html,
        ),
        Node::Span { value, marks } => render_span(value, marks),
        Node::Blockquote { .. } => format!("<blockquote>{}</blockquote>", ctx.children_html),
        Node::Code { language, code } => match language {
            Some(language) => format!(
                "<pre><code class=\"language-{lang}\">{code}</code></pre>",
                lang = escape_attr(language),
                code = escape_text(code),
            ),
            None => format!("<pre><code>{}</code></pre>", escape_text(code)),
        },
        Node::ThematicBreak => "<hr>".to_string(),
        Node::Unknown { kind } => {
            tracing::debug!(kind = %kind, "unknown node kind, rendering nothing");
            String::new()
        }
    };
    Ok(html)
}

fn render_span(value: &str, marks: &[Mark]) -> String {
    let mut html = escape_text(value);
    // Innermost mark is the last one listed, matching the CMS editor.
    for mark in marks.iter().rev() {
        let tag = match mark {
            Mark::Strong => "strong",
            Mark::Emphasis => "em",
            Mark::Code => "code",
            Mark::Underline => "u",
            Mark::Strikethrough => "s",
            Mark::Highlight => "mark",
        };
        html = format!("<{tag}>{html}</{tag}>");
    }
    html
}
