//! Virtual element tree produced by component rendering

use std::fmt::Write as _;

use crate::kit::utils::class_names;

/// What a node represents
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An element with a tag name such as `div` or `input`
    Element(String),
    /// A text run
    Text(String),
    /// A transparent grouping of children
    Fragment,
}

/// A node in the UI tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    /// Attributes in insertion order
    attributes: Vec<(String, String)>,
    /// Child nodes
    children: Vec<Node>,
}

/// Void elements that never carry children in serialized markup
const VOID_TAGS: &[&str] = &["input", "img", "br", "hr"];

impl Node {
    /// Create an element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element(tag.into()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(text.into()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a fragment wrapping the given children
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            kind: NodeKind::Fragment,
            attributes: Vec::new(),
            children: children.into_iter().collect(),
        }
    }

    /// Set an attribute, replacing a previous value with the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute only when `value` is `Some`
    pub fn attr_opt<V: Into<String>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (present with an empty value) when `on` is true
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    /// Set the class attribute, normalising whitespace
    pub fn class(self, classes: impl AsRef<str>) -> Self {
        let normalized = class_names(classes.as_ref());
        if normalized.is_empty() {
            self
        } else {
            self.attr("class", normalized)
        }
    }

    /// Append a child node
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node when `Some`
    pub fn child_opt(mut self, child: Option<Node>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    /// Append several child nodes
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set an attribute in place
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Append a child node in place
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// What kind of node this is
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Tag name for element nodes
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element(tag) => Some(tag),
            _ => None,
        }
    }

    /// Get a reference to this node's children
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to this node's children
    pub fn child_nodes_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a (boolean) attribute is present
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// All attributes in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Whether the class attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split(' ').any(|c| c == class))
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            if let NodeKind::Text(text) = &node.kind {
                out.push_str(text);
            }
        });
        out
    }

    /// Visit this node and all descendants in document order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Collect every node (including self) matching `predicate`
    pub fn find_all(&self, predicate: impl Fn(&Node) -> bool) -> Vec<&Node> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if predicate(node) {
                found.push(node);
            }
        });
        found
    }

    /// First node (including self) matching `predicate`
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
        self.find_dyn(&predicate)
    }

    fn find_dyn(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_dyn(predicate))
    }

    /// Find an element by its `id` attribute
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.find(|node| node.attribute("id") == Some(id))
    }

    /// Find all elements with the given tag
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Node> {
        self.find_all(|node| node.tag() == Some(tag))
    }

    /// Serialize to HTML-like markup, mostly for debugging and snapshots
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(text) => out.push_str(&escape(text)),
            NodeKind::Fragment => {
                for child in &self.children {
                    child.write_markup(out);
                }
            }
            NodeKind::Element(tag) => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in &self.attributes {
                    if value.is_empty() {
                        let _ = write!(out, " {name}");
                    } else {
                        let _ = write!(out, " {name}=\"{}\"", escape(value));
                    }
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for child in &self.children {
                    child.write_markup(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap rendered nodes into a single root for querying
pub fn root(nodes: Vec<Node>) -> Node {
    Node::fragment(nodes)
}
