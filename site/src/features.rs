//! Feature records shown in the landing page card.

use crate::assets::StaticPathResolver;
use crate::icons;
use starsite_core::prelude::*;

/// One entry of the feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub description: String,
    pub icon: Node,
    pub details: Node,
}

impl Feature {
    pub fn new(
        description: impl Into<String>,
        icon: impl Into<Node>,
        details: impl Into<Node>,
    ) -> Self {
        Self {
            description: description.into(),
            icon: icon.into(),
            details: details.into(),
        }
    }
}

/// Capabilities shipped in the default bundle.
pub const BUILT_IN_PLUGINS: [&str; 9] = [
    "Actions",
    "Attribute Binding",
    "Focus",
    "HTMX like features",
    "Intersects",
    "Two-Way Binding",
    "Visibility",
    "Teleporting",
    "Text Replacement",
];

/// The reference feature list, in display order.
pub fn default_features(resolver: &dyn StaticPathResolver) -> Vec<Feature> {
    vec![
        Feature::new(
            "Fine Grained Reactivity via Signals",
            icons::GIT_DIFF.node(resolver),
            div().text(
                "No Virtual DOM. proxy wrappers, or re-rendering the entire page on every change.  Take the best available options and use hassle free.",
            ),
        ),
        Feature::new(
            "Fully Compliant",
            icons::HTML5.node(resolver),
            div().text(
                "No monkey patching, no custom elements, no custom attributes, no custom anything.  Just plain old HTML5.",
            ),
        ),
        Feature::new(
            "Everything is an Extension",
            icons::PLUGINS.node(resolver),
            div().text(
                "Disagree with the built-in behavior? No problem, just write your own extension in a type safe way.  Take what you need, leave what you don't.",
            ),
        ),
        Feature::new(
            "Batteries Included",
            icons::BATTERIES.node(resolver),
            div().class("breadcrumbs").child(
                ul().class("flex flex-wrap gap-2 justify-center items-center")
                    .child(range(BUILT_IN_PLUGINS, |name| li().text(name))),
            ),
        ),
    ]
}
