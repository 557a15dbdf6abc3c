//! # Starsite Core
//!
//! Declarative HTML trees: the [`Node`] model, composition combinators and a
//! deterministic renderer. Nothing in here touches the network.

pub mod combinators;
pub mod document;
pub mod node;
pub mod render;
pub mod tags;

pub use combinators::{nodes, range, range_indexed, when};
pub use document::Document;
pub use node::{Attribute, Element, Modifier, Node};
pub use render::render;

pub mod prelude {
    pub use crate::combinators::{nodes, range, range_indexed, when};
    pub use crate::document::Document;
    pub use crate::node::{Element, Modifier, Node};
    pub use crate::tags::*;
}
