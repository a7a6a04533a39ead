//! HTML document tree: parsing plus the read-only helpers the extractor needs.

pub mod query;
pub mod text;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

pub use query::{by_tag, find, find_all, has_attr, has_child, next_sibling};
pub use text::text;

/// Parse a complete HTML document. Malformed markup is recovered, never rejected.
pub fn parse(input: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(input)
}

/// Local tag name of an element node, `None` for text, comments and the document.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Heading level of an `<h1>`..`<h6>` element.
pub fn heading_level(node: &Handle) -> Option<u8> {
    let tag = tag_name(node)?;
    let digit = tag.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// Parent of `node`, if it is still attached to a live tree.
pub fn parent(node: &Handle) -> Option<Handle> {
    // rcdom keeps the parent in a Cell, so it has to be taken and put back.
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

/// Siblings that come after `node` in document order.
pub fn following_siblings(node: &Handle) -> Vec<Handle> {
    let Some(parent) = parent(node) else {
        return Vec::new();
    };
    let children = parent.children.borrow();
    children
        .iter()
        .position(|c| std::rc::Rc::ptr_eq(c, node))
        .map(|i| children[i + 1..].to_vec())
        .unwrap_or_default()
}
