//! Flatten the text content of a subtree into a single line.

use super::query::find_all;
use markup5ever_rcdom::{Handle, NodeData};

/// Concatenated text of every text leaf under `node`.
///
/// Each leaf loses its leading and trailing newlines and has its inner
/// newlines replaced by spaces. Whitespace-only leaves are dropped. Leaves
/// are joined with no separator.
pub fn text(node: &Handle) -> String {
    let leaves = find_all(node, &|n: &Handle| matches!(n.data, NodeData::Text { .. }));
    let mut out = String::new();
    for leaf in leaves {
        if let NodeData::Text { ref contents } = leaf.data {
            let contents = contents.borrow();
            if contents.trim().is_empty() {
                continue;
            }
            out.push_str(&contents.trim_matches('\n').replace('\n', " "));
        }
    }
    out
}
