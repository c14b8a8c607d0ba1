//! Immutable DOM snapshot
//!
//! The extractor never touches a live page. Bindings copy the relevant part
//! of a document into this minimal tree (elements with a class attribute and
//! ordered children, text nodes, comments) and the extractor reads only that.

pub mod html;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use html::parse_html;

/// A node in a DOM snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    /// An element with its class attribute and children
    Element(ElementNode),
    /// A text node
    Text(String),
    /// A comment node
    Comment(String),
}

impl DomNode {
    /// Borrow the element, if this node is one
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            DomNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Text content with DOM `textContent` semantics.
    ///
    /// Text and comment nodes return their data; elements concatenate the
    /// text of every descendant text node, skipping comments.
    pub fn text_content(&self) -> String {
        match self {
            DomNode::Element(el) => el.text_content(),
            DomNode::Text(text) | DomNode::Comment(text) => text.clone(),
        }
    }
}

impl From<ElementNode> for DomNode {
    fn from(el: ElementNode) -> Self {
        DomNode::Element(el)
    }
}

/// An element node in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    class: String,
    children: Vec<DomNode>,
}

impl ElementNode {
    /// Create an element with a tag name and raw class attribute
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: class.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<DomNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(DomNode::Text(text.into()));
        self
    }

    /// Replace all children
    pub fn with_children(mut self, children: Vec<DomNode>) -> Self {
        self.children = children;
        self
    }

    /// Lowercase tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw class attribute, exactly as found on the element
    pub fn class_attr(&self) -> &str {
        &self.class
    }

    /// Class tokens in attribute order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.split_ascii_whitespace()
    }

    /// Whether the class token set contains `name`
    pub fn has_class(&self, name: &str) -> bool {
        self.classes().any(|c| c == name)
    }

    /// Whether the class token set contains every name in `names`
    pub fn has_all_classes<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|n| self.has_class(n.as_ref()))
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[DomNode] {
        &self.children
    }

    /// First child node of any kind
    pub fn first_child(&self) -> Option<&DomNode> {
        self.children.first()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                DomNode::Element(el) => el.collect_text(out),
                DomNode::Text(text) => out.push_str(text),
                DomNode::Comment(_) => {}
            }
        }
    }

    /// Descendant elements in document (pre-)order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = Vec::new();
        push_element_children(&mut stack, self);
        Descendants { stack }
    }

    /// First descendant element carrying class `name`
    pub fn find_class(&self, name: &str) -> Option<&ElementNode> {
        self.descendants().find(|el| el.has_class(name))
    }
}

fn push_element_children<'a>(stack: &mut Vec<&'a ElementNode>, el: &'a ElementNode) {
    stack.extend(el.children.iter().rev().filter_map(DomNode::as_element));
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    stack: Vec<&'a ElementNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        push_element_children(&mut self.stack, el);
        Some(el)
    }
}
