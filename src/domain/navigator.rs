//! Path-addressable navigation over a category tree.
//!
//! Two pure operations: `flatten` turns a tree into a `FlatIndex` of
//! dotted path to label, `resolve` walks a dotted path down to a node.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::domain::node::{CategoryNode, PATH_SEPARATOR};

/// Every leaf's full dotted path mapped to its label.
pub type FlatIndex = BTreeMap<String, String>;

/// Flatten the whole tree; keys are paths from the root.
pub fn flatten(tree: &CategoryNode) -> FlatIndex {
    flatten_with_prefix(tree, "")
}

/// Flatten a tree whose paths are reported relative to `prefix`.
///
/// Used to flatten a resolved subtree while keeping absolute paths as keys.
pub fn flatten_with_prefix(tree: &CategoryNode, prefix: &str) -> FlatIndex {
    let mut index = FlatIndex::new();
    collect(tree, prefix, &mut index);
    debug!("flatten: prefix={:?} entries={}", prefix, index.len());
    index
}

fn collect(node: &CategoryNode, prefix: &str, index: &mut FlatIndex) {
    match node {
        CategoryNode::Leaf(label) => {
            index.insert(prefix.to_string(), label.clone());
        }
        CategoryNode::Branch(children) => {
            for (key, child) in children {
                let path = join(prefix, key);
                collect(child, &path, index);
            }
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{key}")
    }
}

/// Walk `path` from the root of `tree`.
///
/// Returns `None` for an empty path, an empty segment, a missing child, or
/// when a leaf is reached while segments remain. Matching is exact and
/// case-sensitive.
pub fn resolve<'a>(tree: &'a CategoryNode, path: &str) -> Option<&'a CategoryNode> {
    if path.is_empty() {
        trace!("resolve: empty path");
        return None;
    }

    let mut current = tree;
    for segment in path.split(PATH_SEPARATOR) {
        let children = current.children()?;
        match children.get(segment) {
            Some(child) => current = child,
            None => {
                trace!("resolve: no child {:?} on path {:?}", segment, path);
                return None;
            }
        }
    }
    Some(current)
}

/// Resolve `path` and return its label; `None` if absent or a branch.
pub fn resolve_label<'a>(tree: &'a CategoryNode, path: &str) -> Option<&'a str> {
    resolve(tree, path).and_then(CategoryNode::as_label)
}
