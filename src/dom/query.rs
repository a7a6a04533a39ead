//! Depth-first search helpers over an rcdom tree.
//!
//! Every search is pre-order: a node is tested before its children.

use super::{following_siblings, tag_name};
use markup5ever_rcdom::{Handle, NodeData};

/// First node under (and including) `root` that satisfies `pred`.
pub fn find(root: &Handle, pred: &impl Fn(&Handle) -> bool) -> Option<Handle> {
    if pred(root) {
        return Some(root.clone());
    }
    root.children.borrow().iter().find_map(|c| find(c, pred))
}

/// Every node under `root` that satisfies `pred`, in document order.
///
/// The subtree of a matching node is not searched, so a `<td>` nested inside
/// a matched `<td>` is never reported twice.
pub fn find_all(root: &Handle, pred: &impl Fn(&Handle) -> bool) -> Vec<Handle> {
    let mut found = Vec::new();
    collect(root, pred, &mut found);
    found
}

fn collect(node: &Handle, pred: &impl Fn(&Handle) -> bool, found: &mut Vec<Handle>) {
    if pred(node) {
        found.push(node.clone());
        return;
    }
    for child in node.children.borrow().iter() {
        collect(child, pred, found);
    }
}

/// First following sibling of `node` that satisfies `pred`. Descendants are not searched.
pub fn next_sibling(node: &Handle, pred: &impl Fn(&Handle) -> bool) -> Option<Handle> {
    following_siblings(node).into_iter().find(|s| pred(s))
}

/// Whether any direct child of `node` satisfies `pred`.
pub fn has_child(node: &Handle, pred: &impl Fn(&Handle) -> bool) -> bool {
    node.children.borrow().iter().any(|c| pred(c))
}

/// Whether `node` is an element carrying the attribute `key="val"`.
pub fn has_attr(node: &Handle, key: &str, val: &str) -> bool {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .any(|a| &*a.name.local == key && &*a.value == val),
        _ => false,
    }
}

/// Predicate matching elements with the given local tag name.
pub fn by_tag(tag: &str) -> impl Fn(&Handle) -> bool + '_ {
    move |n| tag_name(n) == Some(tag)
}
