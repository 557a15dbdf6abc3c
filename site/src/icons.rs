//! Icon catalog. Icons are symbols in a static SVG sprite (`icons.svg`),
//! referenced by `<use href="…#set-name">`, so the page carries no icon data.

use crate::assets::StaticPathResolver;
use starsite_core::Node;
use starsite_core::tags::{svg, svg_use};

/// Logical name of the sprite sheet in the asset store.
pub const SPRITE: &str = "icons.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub set: &'static str,
    pub name: &'static str,
}

impl Icon {
    pub const fn new(set: &'static str, name: &'static str) -> Self {
        Self { set, name }
    }

    /// Symbol id inside the sprite.
    pub fn symbol_id(&self) -> String {
        format!("{}-{}", self.set, self.name)
    }

    pub fn node(&self, resolver: &dyn StaticPathResolver) -> Node {
        self.node_with_class(resolver, "")
    }

    pub fn node_with_class(&self, resolver: &dyn StaticPathResolver, class: &str) -> Node {
        let href = format!("{}#{}", resolver.resolve(SPRITE), self.symbol_id());
        svg()
            .class("icon")
            .class(class)
            .attr("data-icon", format!("{}:{}", self.set, self.name))
            .attr("aria-hidden", "true")
            .child(svg_use().attr("href", href))
            .into()
    }
}

pub const AWARD_STAR: Icon = Icon::new("material-symbols", "award-star-outline");
pub const ADD: Icon = Icon::new("material-symbols", "add-rounded");
pub const HELP: Icon = Icon::new("material-symbols", "help");
pub const GIT_DIFF: Icon = Icon::new("ph", "git-diff");
pub const HTML5: Icon = Icon::new("mdi", "language-html5");
pub const ROCKET_LAUNCH: Icon = Icon::new("mdi", "rocket-launch");
pub const PLUGINS: Icon = Icon::new("gridicons", "plugins");
pub const BATTERIES: Icon = Icon::new("game-icons", "batteries");
pub const DISCORD: Icon = Icon::new("skill-icons", "discord");
pub const GITHUB: Icon = Icon::new("skill-icons", "github-light");
pub const FILE_ZIP: Icon = Icon::new("tabler", "file-zip");
pub const COLUMN_DEPENDENCY: Icon = Icon::new("carbon", "column-dependency");
pub const CHECKMARK: Icon = Icon::new("zondicons", "checkmark");

const fn file_type(name: &'static str) -> Icon {
    Icon::new("vscode-icons", name)
}

/// Backend languages shown in the hero wall, in display order.
pub const LANGUAGES: [Icon; 32] = [
    file_type("file-type-assembly"),
    file_type("file-type-c"),
    file_type("file-type-cpp"),
    file_type("file-type-cobol"),
    file_type("file-type-clojure"),
    file_type("file-type-crystal"),
    file_type("file-type-csharp"),
    file_type("file-type-elixir"),
    file_type("file-type-fsharp"),
    file_type("file-type-fortran"),
    file_type("file-type-go-gopher"),
    file_type("file-type-haskell"),
    file_type("file-type-java"),
    file_type("file-type-js"),
    file_type("file-type-julia"),
    file_type("file-type-kotlin"),
    file_type("file-type-lisp"),
    file_type("file-type-lua"),
    file_type("file-type-nim"),
    file_type("file-type-ocaml"),
    file_type("file-type-perl"),
    file_type("file-type-php"),
    file_type("file-type-python"),
    file_type("file-type-r"),
    file_type("file-type-ruby"),
    file_type("file-type-rust"),
    file_type("file-type-scala"),
    file_type("file-type-shell"),
    file_type("file-type-swift"),
    file_type("file-type-typescript"),
    file_type("file-type-vb"),
    file_type("file-type-zig"),
];

/// The toolchain the framework is built with, joined by [`ADD`].
pub const TOOLCHAIN: [Icon; 4] = [
    file_type("file-type-html"),
    file_type("file-type-typescript-official"),
    file_type("file-type-vite"),
    file_type("file-type-go-gopher"),
];
