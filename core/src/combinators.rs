//! Composition combinators: build nodes from data and from other nodes.

use crate::node::Node;

/// Map an ordered sequence of records to one fragment, one child per record,
/// in input order. An empty input yields an empty fragment.
pub fn range<T, I, F, N>(items: I, mut f: F) -> Node
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> N,
    N: Into<Node>,
{
    Node::Fragment(items.into_iter().map(|item| f(item).into()).collect())
}

/// Like [`range`], with the zero-based index of each record.
pub fn range_indexed<T, I, F, N>(items: I, mut f: F) -> Node
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize, T) -> N,
    N: Into<Node>,
{
    Node::Fragment(
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| f(i, item).into())
            .collect(),
    )
}

/// `f()` when `cond` holds, otherwise the empty node.
pub fn when<F, N>(cond: bool, f: F) -> Node
where
    F: FnOnce() -> N,
    N: Into<Node>,
{
    if cond { f().into() } else { Node::empty() }
}

/// Collect nodes into a fragment.
pub fn nodes<I, N>(items: I) -> Node
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    Node::fragment(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::li;

    #[test]
    fn test_range_preserves_order() {
        let node = range(["one", "two", "three"], |s| li().text(s));
        let Node::Fragment(children) = node else {
            panic!("range must produce a fragment");
        };

        let texts: Vec<_> = children
            .iter()
            .map(|c| c.as_element().unwrap().child_nodes()[0].clone())
            .collect();
        assert_eq!(
            texts,
            vec![Node::text("one"), Node::text("two"), Node::text("three")]
        );
    }

    #[test]
    fn test_range_empty_input_is_empty_fragment() {
        let items: Vec<&str> = Vec::new();
        let node = range(items, |s| li().text(s));
        assert_eq!(node, Node::Fragment(vec![]));
        assert_eq!(node.render(), "");
    }

    #[test]
    fn test_range_indexed_passes_index() {
        let node = range_indexed(["a", "b"], |i, s| format!("{i}:{s}"));
        assert_eq!(node.render(), "0:a1:b");
    }

    #[test]
    fn test_when() {
        assert_eq!(when(false, || "hidden"), Node::empty());
        assert_eq!(when(true, || "shown"), Node::text("shown"));
    }
}
