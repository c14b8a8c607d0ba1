//! Live browser DOM binding (wasm32 only)
//!
//! Copies a `web_sys` subtree into a [`DomNode`] snapshot so extraction runs
//! against an immutable tree instead of live nodes.

use super::{DomNode, ElementNode};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

/// Snapshot the whole current document, starting at `documentElement`
pub fn snapshot_document() -> Option<ElementNode> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(snapshot_element(&root))
}

/// Snapshot a live element and its subtree
pub fn snapshot_element(el: &Element) -> ElementNode {
    let nodes = el.child_nodes();
    let children = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| snapshot_node(&node))
        .collect();

    ElementNode::new(
        el.tag_name().to_ascii_lowercase(),
        el.get_attribute("class").unwrap_or_default(),
    )
    .with_children(children)
}

fn snapshot_node(node: &Node) -> Option<DomNode> {
    match node.node_type() {
        Node::ELEMENT_NODE => node
            .dyn_ref::<Element>()
            .map(|el| DomNode::Element(snapshot_element(el))),
        Node::TEXT_NODE => Some(DomNode::Text(node.text_content().unwrap_or_default())),
        Node::COMMENT_NODE => Some(DomNode::Comment(node.text_content().unwrap_or_default())),
        _ => None,
    }
}
