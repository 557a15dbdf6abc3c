//! # Renderer
//!
//! Serializes a node tree to markup in one pass. Output is a pure function
//! of the tree: attribute and child order are preserved exactly.

use crate::node::{Element, Node};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Render a node to a fresh string.
pub fn render(node: &Node) -> String {
    let mut out = String::with_capacity(1024);
    render_into(node, &mut out);
    out
}

/// Append the markup for `node` to `out`.
pub fn render_into(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => render_element_into(el, out),
        Node::Text(text) => escape_text_into(text, out),
        Node::Raw(markup) => out.push_str(markup),
        Node::Fragment(children) => {
            for child in children {
                render_into(child, out);
            }
        }
    }
}

fn render_element_into(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    for attr in el.attrs() {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            escape_attr_into(value, out);
            out.push('"');
        }
    }
    out.push('>');

    // void elements drop children
    if is_void(el.tag()) {
        return;
    }

    for child in el.child_nodes() {
        render_into(child, out);
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

/// Escape text content.
pub fn escape_text_into(text: &str, out: &mut String) {
    escape_into(text, out);
}

/// Escape a double-quoted attribute value.
pub fn escape_attr_into(value: &str, out: &mut String) {
    escape_into(value, out);
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    let mut last = 0;
    for (i, c) in text.char_indices() {
        let replacement = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(replacement);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{a, br, div, li, link, ul};

    #[test]
    fn test_text_is_escaped() {
        let node = div().text("<b>&amp;</b>");
        assert_eq!(render(&node.into()), "<div>&lt;b&gt;&amp;amp;&lt;/b&gt;</div>");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node = div().child(Node::raw("<b>&amp;</b>"));
        assert_eq!(render(&node.into()), "<div><b>&amp;</b></div>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let node = a().attr("title", "say \"hi\" & <wave>");
        assert_eq!(
            render(&node.into()),
            "<a title=\"say &quot;hi&quot; &amp; &lt;wave&gt;\"></a>"
        );
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let node = div()
            .child(link().attr("rel", "icon").attr("href", "/favicon.svg"))
            .child(br())
            .child(Element::new("script").bool_attr("defer"));
        assert_eq!(
            render(&node.into()),
            "<div><link rel=\"icon\" href=\"/favicon.svg\"><br><script defer></script></div>"
        );
    }

    #[test]
    fn test_fragments_flatten_in_order() {
        let node = ul().child(Node::fragment([li().text("1"), li().text("2")]));
        assert_eq!(render(&node.into()), "<ul><li>1</li><li>2</li></ul>");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let node: Node = div()
            .class("a b")
            .attr("data-x", "1")
            .child(li().text("x"))
            .into();
        assert_eq!(render(&node), render(&node));
    }

    #[test]
    fn test_escape_multibyte() {
        assert_eq!(escape("✓ <ok>"), "✓ &lt;ok&gt;");
    }
}
