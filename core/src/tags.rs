//! Tag helpers: one constructor per HTML element used by the site.

use crate::node::Element;

macro_rules! tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">`")]
            pub fn $name() -> Element {
                Element::new($tag)
            }
        )*
    };
}

tags! {
    html => "html",
    head => "head",
    body => "body",
    title => "title",
    meta => "meta",
    link => "link",
    script => "script",
    style_tag => "style",
    header => "header",
    nav => "nav",
    main_tag => "main",
    section => "section",
    footer => "footer",
    div => "div",
    span => "span",
    p => "p",
    a => "a",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    ul => "ul",
    ol => "ol",
    li => "li",
    pre => "pre",
    code => "code",
    button => "button",
    input => "input",
    img => "img",
    br => "br",
    hr => "hr",
    svg => "svg",
    svg_use => "use",
}
