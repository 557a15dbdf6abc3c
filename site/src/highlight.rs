//! Minimal syntax highlighting for code samples.
//!
//! The output is a trusted [`Node::Raw`]: every byte of the source is escaped
//! before it is wrapped in `<span class="hl-…">`, so the only live markup is
//! what this module emits.

use starsite_core::Node;
use starsite_core::render::{escape_attr_into, escape_text_into};

/// Highlight `code` as `lang`. Markup languages get tag, attribute and
/// string spans; anything else is escaped plain text.
pub fn highlight(lang: &str, code: &str) -> Node {
    let mut out = String::with_capacity(code.len() * 2);
    out.push_str("<pre class=\"highlight\"><code class=\"language-");
    escape_attr_into(lang, &mut out);
    out.push_str("\">");
    match lang {
        "html" | "xml" | "svg" => highlight_markup(code, &mut out),
        _ => escape_text_into(code, &mut out),
    }
    out.push_str("</code></pre>");
    Node::raw(out)
}

fn highlight_markup(code: &str, out: &mut String) {
    let mut rest = code;
    while let Some(start) = rest.find('<') {
        escape_text_into(&rest[..start], out);
        rest = &rest[start..];
        let end = tag_end(rest);
        highlight_tag(&rest[..end], out);
        rest = &rest[end..];
    }
    escape_text_into(rest, out);
}

/// Byte index just past the `>` closing the tag at the start of `s`,
/// ignoring `>` inside quoted values.
fn tag_end(s: &str) -> usize {
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return i + 1,
            _ => {}
        }
    }
    s.len()
}

fn span(class: &str, text: &str, out: &mut String) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    escape_text_into(text, out);
    out.push_str("</span>");
}

fn highlight_tag(tag: &str, out: &mut String) {
    let inner = &tag[1..];
    let (body, close) = if let Some(body) = inner.strip_suffix("/>") {
        (body, "/>")
    } else if let Some(body) = inner.strip_suffix('>') {
        (body, ">")
    } else {
        (inner, "")
    };

    let name_end = body.find(char::is_whitespace).unwrap_or(body.len());
    span("hl-tag", &tag[..1 + name_end], out);

    let mut attrs = &body[name_end..];
    while let Some(c) = attrs.chars().next() {
        let n = if c.is_whitespace() {
            let n = attrs
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(attrs.len());
            out.push_str(&attrs[..n]);
            n
        } else if c == '"' || c == '\'' {
            let n = attrs[1..].find(c).map_or(attrs.len(), |i| i + 2);
            span("hl-str", &attrs[..n], out);
            n
        } else if c == '=' {
            out.push('=');
            1
        } else {
            let n = attrs
                .find(|c: char| c.is_whitespace() || c == '=')
                .unwrap_or(attrs.len());
            span("hl-attr", &attrs[..n], out);
            n
        };
        attrs = &attrs[n..];
    }

    if !close.is_empty() {
        span("hl-tag", close, out);
    }
}
