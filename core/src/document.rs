//! The top-level HTML5 document: metadata, head nodes and a body element.

use crate::node::{Element, Node};
use crate::render::render_into;
use crate::tags::{body, head, html, meta, title};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub language: String,
    pub description: String,
    /// Extra head nodes, after the generated metadata.
    pub head: Vec<Node>,
    pub body: Element,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: "en".to_string(),
            description: String::new(),
            head: Vec::new(),
            body: body(),
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn head(mut self, node: impl Into<Node>) -> Self {
        self.head.push(node.into());
        self
    }

    pub fn body(mut self, body: Element) -> Self {
        self.body = body;
        self
    }

    /// Metadata nodes every page starts its head with.
    fn meta_nodes(&self) -> [Node; 4] {
        [
            meta().attr("charset", "UTF-8").into(),
            meta()
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0")
                .into(),
            title().text(self.title.as_str()).into(),
            meta()
                .attr("name", "description")
                .attr("content", self.description.as_str())
                .into(),
        ]
    }

    /// The `html[lang] > head + body` tree for this document.
    pub fn into_node(self) -> Node {
        let head = head()
            .children(self.meta_nodes())
            .children(self.head);

        html()
            .attr("lang", self.language)
            .child(head)
            .child(self.body)
            .into()
    }

    /// Serialize to a complete document, doctype included.
    pub fn render(self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html>");
        render_into(&self.into_node(), &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{div, link};

    #[test]
    fn test_document_layout() {
        let doc = Document::new("Demo <1>")
            .language("en")
            .description("A demo")
            .head(link().attr("rel", "icon").attr("href", "/favicon.svg"))
            .body(body().class("flex").child(div().text("hi")));

        let html = doc.render();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">"));
        assert!(html.contains("<title>Demo &lt;1&gt;</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"A demo\">"));
        assert!(html.contains("<link rel=\"icon\" href=\"/favicon.svg\"></head>"));
        assert!(html.ends_with("<body class=\"flex\"><div>hi</div></body></html>"));
    }

    #[test]
    fn test_into_node_is_html_root() {
        let node = Document::new("Demo")
            .language("de")
            .head(link().attr("rel", "stylesheet"))
            .into_node();

        let Some(root) = node.as_element() else {
            panic!("document root should be an element");
        };
        assert_eq!(root.tag(), "html");
        assert_eq!(root.get_attr("lang"), Some("de"));

        let tags: Vec<_> = root
            .child_nodes()
            .iter()
            .filter_map(Node::as_element)
            .map(Element::tag)
            .collect();
        assert_eq!(tags, ["head", "body"]);

        let Some(head) = root.child_nodes()[0].as_element() else {
            panic!("head should be an element");
        };
        assert_eq!(head.child_nodes().len(), 5);
    }
}
