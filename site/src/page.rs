//! # Page Assembler
//!
//! Pure composition of the landing page: a head with metadata and stylesheet
//! links, and a body of fixed marketing sections around one data-driven
//! feature list. Nothing here can fail.

use crate::assets::StaticPathResolver;
use crate::features::Feature;
use crate::highlight::highlight;
use crate::icons::{self, Icon};
use serde::Deserialize;
use starsite_core::prelude::*;

/// Page-level text and links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub language: String,
    pub description: String,
    pub fonts_url: String,
    pub repository_url: String,
    pub discord_url: String,
    pub author_name: String,
    pub author_url: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Datastar ".to_string(),
            language: "en".to_string(),
            description: "Datastar is a declarative frontend framework that takes the best of modern tooling and combines them with a heavy dose of declarative hypermedia into a single framework that is blazingly easy to use.".to_string(),
            fonts_url: "https://fonts.googleapis.com/css?family=Orbitron|Inter|JetBrains+Mono&display=swap".to_string(),
            repository_url: "https://github.com/delaneyj/datastar".to_string(),
            discord_url: "https://discord.com/channels/1035247242887561326/1149367785374359613".to_string(),
            author_name: "Delaney".to_string(),
            author_url: "http://github.com/delaneyj".to_string(),
        }
    }
}

/// Everything the assembler needs for one render.
pub struct PageInput<'a> {
    /// Human readable compressed bundle size.
    pub size: &'a str,
    pub features: &'a [Feature],
    pub resolver: &'a dyn StaticPathResolver,
    pub meta: &'a PageMeta,
}

const CODE_SAMPLE: &str = r#"<div data-signal-count="0">
	<div>
		<button data-on-click="$count++">Increment +</button>
		<button data-on-click="$count--">Decrement -</button>
		<input type="number" data-model="count" />
	</div>
	<button
		data-signal-get="'/api/echo'"
		data-on-load="@get"
		data-on-click="@get"
	>
		Contents
	</button>
</div>
"#;

const TAGLINE: &str = "Takes the best of modern tooling and combines them with a heavy dose of declarative hypermedia into a single framework that is blazingly easy to use.";

/// Build the landing page document.
pub fn assemble(input: &PageInput<'_>) -> Document {
    let meta = input.meta;
    let resolver = input.resolver;

    Document::new(meta.title.as_str())
        .language(meta.language.as_str())
        .description(meta.description.as_str())
        .head(link().attr("rel", "icon").href(resolver.resolve("favicon.svg")))
        .head(link().attr("rel", "stylesheet").href(meta.fonts_url.as_str()))
        .head(
            link()
                .attr("rel", "stylesheet")
                .attr("type", "text/css")
                .href(resolver.resolve("tailwind.css")),
        )
        .body(
            body()
                .class("flex flex-col w-full min-h-screen")
                .child(hero(resolver))
                .child(navigation(meta, resolver))
                .child(
                    div()
                        .class("flex-1 flex flex-wrap md:p-16 text-xl flex-col items-center text-center bg-gradient-to-tr from-base-100 to-base-200")
                        .child(
                            div()
                                .class("max-w-4xl flex flex-col items-center justify-center gap-16")
                                .child(language_wall(resolver))
                                .child(headline())
                                .child(
                                    div()
                                        .class("flex flex-col gap-2 w-full")
                                        .child(code_sample())
                                        .child(badges(input.size, resolver)),
                                )
                                .child(p().text(TAGLINE))
                                .child(feature_card(input.features))
                                .child(built_with(meta, resolver))
                                .child(call_to_action(resolver)),
                        ),
                ),
        )
}

fn hero(resolver: &dyn StaticPathResolver) -> Element {
    div()
        .class("p-4 flex flex-col items-center bg-cover bg-opacity-50 text-white bg-center")
        .attr(
            "style",
            format!("background-image: url({});", resolver.resolve("bg.jpg")),
        )
        .child(
            div()
                .class("w-full flex justify-between items-center gap-2  backdrop-blur-sm py-2")
                .child(
                    div()
                        .class("flex gap-2 items-center text-5xl font-display")
                        .text("Datastar")
                        .child(icons::AWARD_STAR.node(resolver)),
                )
                .child(div().text("Declarative Frontend Framework")),
        )
}

fn navigation(meta: &PageMeta, resolver: &dyn StaticPathResolver) -> Element {
    let social = |icon: Icon, href: &str| {
        a().class("btn btn-ghost btn-sm")
            .child(icon.node_with_class(resolver, "text-2xl"))
            .href(href)
    };

    div()
        .class("flex justify-end gap-6 px-4 py-1 bg-base-100 text-base-content text-sm")
        .child(a().class("btn btn-primary btn-ghost btn-sm").text("Docs").href("/docs"))
        .child(a().class("btn btn-primary btn-ghost btn-sm").text("Essays").href("/essays"))
        .child(
            div()
                .class("join")
                .child(social(icons::DISCORD, meta.discord_url.as_str()))
                .child(social(icons::GITHUB, meta.repository_url.as_str())),
        )
}

fn language_wall(resolver: &dyn StaticPathResolver) -> Element {
    div()
        .class("flex flex-wrap gap-4 justify-center items-center text-6xl")
        .child(range(icons::LANGUAGES, |icon| icon.node(resolver)))
}

fn headline() -> Element {
    div()
        .child(h1().class("text-6xl font-bold").text("HTML on whatever you like"))
        .child(
            a().class("link-accent text-4xl")
                .href("https://htmx.org/essays/hypermedia-on-whatever-youd-like/")
                .text("It's the best idea since web rings"),
        )
}

fn code_sample() -> Element {
    div()
        .class("bg-base-100 shadow-inner text-base-content p-4 rounded-box")
        .child(highlight("html", CODE_SAMPLE))
}

fn badge(icon: Node, label: impl Into<String>) -> Element {
    div()
        .class("badge badge-primary flex-1 gap-1")
        .child(icon)
        .text(label)
}

fn badges(size: &str, resolver: &dyn StaticPathResolver) -> Element {
    div()
        .class("flex gap-2 justify-center items-center")
        .child(badge(
            icons::FILE_ZIP.node(resolver),
            format!("{size} w/ all extensions"),
        ))
        .child(badge(
            icons::COLUMN_DEPENDENCY.node(resolver),
            "0 Dependencies",
        ))
        .child(badge(icons::CHECKMARK.node(resolver), "Fully Tree Shakeable"))
}

/// One list item per feature, in input order.
pub fn feature_list(features: &[Feature]) -> Element {
    ul()
        .class("flex flex-col gap-6 justify-center items-center text-2xl gap-4  max-w-xl")
        .child(range(features, feature_item))
}

fn feature_item(feature: &Feature) -> Element {
    li().child(
        div()
            .class("flex flex-col gap-1 justify-center items-center")
            .child(
                div()
                    .class("flex gap-2 items-center")
                    .child(feature.icon.clone())
                    .text(feature.description.as_str()),
            )
            .child(
                div()
                    .class("text-lg opacity-50 p-2 rounded")
                    .child(feature.details.clone()),
            ),
    )
}

fn feature_card(features: &[Feature]) -> Element {
    div()
        .class("card w-full shadow-2xl ring-4 bg-base-300 ring-secondary text-secondary-content")
        .child(
            div()
                .class("card-body flex flex-col justify-center items-center")
                .child(feature_list(features)),
        )
}

fn built_with(meta: &PageMeta, resolver: &dyn StaticPathResolver) -> Element {
    let mut toolchain = Vec::with_capacity(icons::TOOLCHAIN.len() * 2);
    for (i, icon) in icons::TOOLCHAIN.iter().enumerate() {
        if i > 0 {
            toolchain.push(icons::ADD.node(resolver));
        }
        toolchain.push(icon.node(resolver));
    }

    div()
        .class("flex flex-col gap-2 justify-center items-center")
        .text("Built with ")
        .child(
            div()
                .class("flex gap-1 justify-center items-center text-5xl")
                .children(toolchain),
        )
        .child(
            div()
                .class("flex gap-2 justify-center items-center")
                .text("by ")
                .child(
                    a().class("link-accent")
                        .href(meta.author_url.as_str())
                        .text(meta.author_name.as_str()),
                )
                .text("and looking for contributors!"),
        )
}

fn call_to_action(resolver: &dyn StaticPathResolver) -> Element {
    div()
        .class("w-full flex gap-2 items-center")
        .child(
            a().class("btn btn-lg flex-1")
                .href("/essays/why-another-framework")
                .child(icons::HELP.node(resolver))
                .text("Why another framework?"),
        )
        .child(
            a().class("btn btn-primary btn-lg flex-1")
                .href("/docs")
                .child(icons::ROCKET_LAUNCH.node(resolver))
                .text("Don't care, just get started"),
        )
}
