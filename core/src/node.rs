//! # Node Model
//!
//! The structural primitive of a page. A [`Node`] is an element, an escaped
//! text leaf, a trusted raw-markup leaf or a fragment of children.
//!
//! Elements are built either fluently:
//!
//! ```
//! use starsite_core::prelude::*;
//!
//! let link = a().class("btn btn-ghost").attr("href", "/docs").text("Docs");
//! assert_eq!(link.get_attr("class"), Some("btn btn-ghost"));
//! ```
//!
//! or from an ordered list of [`Modifier`]s:
//!
//! ```
//! use starsite_core::prelude::*;
//!
//! let link = Element::with("a", [
//!     Modifier::class("btn"),
//!     Modifier::attr("href", "/docs"),
//!     Modifier::child("Docs"),
//! ]);
//! assert_eq!(link.child_nodes().len(), 1);
//! ```

use std::borrow::Cow;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tagged element with attributes and children.
    Element(Element),
    /// Plain text; markup-significant characters are escaped on output.
    Text(String),
    /// Trusted markup emitted verbatim. Never put user input here.
    Raw(String),
    /// An ordered run of children without an element of its own.
    Fragment(Vec<Node>),
}

impl Node {
    /// The no-op node. Renders as nothing.
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Trusted raw markup. Bypasses escaping.
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn fragment<I, N>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Node::Fragment(nodes.into_iter().map(Into::into).collect())
    }

    /// True when the node renders to the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Element(_) => false,
            Node::Text(s) | Node::Raw(s) => s.is_empty(),
            Node::Fragment(children) => children.iter().all(Node::is_empty),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Serialize this node to markup.
    pub fn render(&self) -> String {
        crate::render::render(self)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

/// A single attribute assignment. `value == None` renders as a bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Cow<'static, str>,
    pub value: Option<String>,
}

/// A tagged element.
///
/// Attribute keys are unique and keep the position of their first
/// assignment. `class` accumulates tokens; every other key is last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    attrs: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Build an element by applying `modifiers` in order.
    pub fn with<I>(tag: impl Into<Cow<'static, str>>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = Modifier>,
    {
        modifiers
            .into_iter()
            .fold(Self::new(tag), |el, m| el.apply(m))
    }

    /// Apply one modifier.
    pub fn apply(self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Attr(name, value) => self.attr(name, value),
            Modifier::BoolAttr(name) => self.bool_attr(name),
            Modifier::Class(tokens) => self.class(tokens),
            Modifier::Child(node) => self.child(node),
        }
    }

    /// Set an attribute. Setting `class` through here merges like [`Element::class`].
    pub fn attr(self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == "class" {
            return self.class(value.into());
        }
        self.set(name, Some(value.into()))
    }

    /// Set a valueless attribute such as `defer`.
    pub fn bool_attr(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.set(name.into(), None)
    }

    /// Append whitespace-separated class tokens after any existing ones.
    pub fn class(mut self, tokens: impl AsRef<str>) -> Self {
        let mut incoming = tokens.as_ref().split_whitespace().peekable();
        if incoming.peek().is_none() {
            return self;
        }

        match self.attrs.iter_mut().find(|a| a.name == "class") {
            Some(existing) => {
                let value = existing.value.get_or_insert_with(String::new);
                for token in incoming {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(token);
                }
            }
            None => {
                let joined = incoming.collect::<Vec<_>>().join(" ");
                self.attrs.push(Attribute {
                    name: Cow::Borrowed("class"),
                    value: Some(joined),
                });
            }
        }
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append an escaped text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Value of an attribute. Boolean attributes yield `Some("")`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    fn set(mut self, name: Cow<'static, str>, value: Option<String>) -> Self {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attrs.push(Attribute { name, value }),
        }
        self
    }
}

/// An order-dependent change to an element under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Attr(Cow<'static, str>, String),
    BoolAttr(Cow<'static, str>),
    Class(String),
    Child(Node),
}

impl Modifier {
    pub fn attr(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Modifier::Attr(name.into(), value.into())
    }

    pub fn bool_attr(name: impl Into<Cow<'static, str>>) -> Self {
        Modifier::BoolAttr(name.into())
    }

    pub fn class(tokens: impl Into<String>) -> Self {
        Modifier::Class(tokens.into())
    }

    pub fn child(node: impl Into<Node>) -> Self {
        Modifier::Child(node.into())
    }
}

impl From<Node> for Modifier {
    fn from(node: Node) -> Self {
        Modifier::Child(node)
    }
}

impl From<Element> for Modifier {
    fn from(el: Element) -> Self {
        Modifier::Child(Node::Element(el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_tokens_merge_in_order() {
        let el = Element::new("div").class("a b").class("c");
        assert_eq!(el.get_attr("class"), Some("a b c"));
        assert_eq!(el.attrs().len(), 1);
    }

    #[test]
    fn test_class_duplicates_are_tolerated() {
        let el = Element::new("div").class("a").class("a");
        assert_eq!(el.get_attr("class"), Some("a a"));
    }

    #[test]
    fn test_empty_class_is_noop() {
        let el = Element::new("div").class("   ");
        assert!(el.attrs().is_empty());
    }

    #[test]
    fn test_attr_last_write_wins_and_keeps_position() {
        let el = Element::new("a")
            .attr("href", "/one")
            .attr("rel", "icon")
            .attr("href", "/two");

        let names: Vec<_> = el.attrs().iter().map(|a| a.name.as_ref()).collect();
        assert_eq!(names, vec!["href", "rel"]);
        assert_eq!(el.get_attr("href"), Some("/two"));
    }

    #[test]
    fn test_class_through_attr_merges() {
        let el = Element::new("div").class("a").attr("class", "b");
        assert_eq!(el.get_attr("class"), Some("a b"));
    }

    #[test]
    fn test_modifiers_apply_in_call_order() {
        let el = Element::with(
            "ul",
            [
                Modifier::child(Element::new("li").text("first")),
                Modifier::class("list"),
                Modifier::child(Element::new("li").text("second")),
                Modifier::bool_attr("hidden"),
            ],
        );

        assert_eq!(el.child_nodes().len(), 2);
        assert_eq!(el.get_attr("class"), Some("list"));
        assert_eq!(el.get_attr("hidden"), Some(""));
        let first = el.child_nodes()[0].as_element().unwrap();
        assert_eq!(first.child_nodes()[0], Node::text("first"));
    }

    #[test]
    fn test_empty_fragment_is_empty() {
        assert!(Node::empty().is_empty());
        assert!(Node::fragment([Node::empty(), Node::text("")]).is_empty());
        assert!(!Node::from(Element::new("br")).is_empty());
    }
}
