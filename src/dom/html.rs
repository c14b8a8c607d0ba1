//! HTML text binding
//!
//! Parses a saved page with `scraper` and copies it into a [`DomNode`] tree.

use super::{DomNode, ElementNode};
use scraper::{ElementRef, Html, Node};
use tracing::{debug, instrument};

/// Parse an HTML document and snapshot it, starting at `<html>`
#[instrument(skip(html), fields(len = html.len()))]
pub fn parse_html(html: &str) -> ElementNode {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!("HTML parser recovered from {} errors", document.errors.len());
    }
    snapshot_element(document.root_element())
}

/// Snapshot a `scraper` element and its subtree
pub fn snapshot_element(el: ElementRef<'_>) -> ElementNode {
    let children = el
        .children()
        .filter_map(|child| match child.value() {
            Node::Element(_) => ElementRef::wrap(child).map(|e| snapshot_element(e).into()),
            Node::Text(text) => Some(DomNode::Text(String::from(&**text))),
            Node::Comment(comment) => Some(DomNode::Comment(String::from(&**comment))),
            _ => None,
        })
        .collect();

    ElementNode::new(
        el.value().name(),
        el.value().attr("class").unwrap_or_default(),
    )
    .with_children(children)
}
