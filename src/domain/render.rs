//! Terminal tree rendering for category trees.

use termtree::Tree;
use tracing::instrument;

use crate::domain::node::CategoryNode;

pub trait TreeRender {
    fn to_tree_string(&self, root_name: &str) -> Tree<String>;
}

impl TreeRender for CategoryNode {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self, root_name: &str) -> Tree<String> {
        match self {
            CategoryNode::Leaf(label) => Tree::new(format!("{root_name}: {label}")),
            CategoryNode::Branch(children) => {
                let leaves: Vec<_> = children
                    .iter()
                    .map(|(key, child)| child.to_tree_string(key))
                    .collect();
                Tree::new(root_name.to_string()).with_leaves(leaves)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_branch_when_rendering_then_lists_children_with_labels() {
        let tree = CategoryNode::branch([
            ("dentist", CategoryNode::leaf("Dentist")),
            ("doctor", CategoryNode::leaf("Doctor")),
        ])
        .unwrap();

        let rendered = tree.to_tree_string("medical").to_string();

        assert!(rendered.starts_with("medical\n"));
        assert!(rendered.contains("dentist: Dentist"));
        assert!(rendered.contains("doctor: Doctor"));
    }

    #[test]
    fn given_leaf_when_rendering_then_shows_name_and_label() {
        let rendered = CategoryNode::leaf("Wife").to_tree_string("wife").to_string();
        assert_eq!(rendered.trim_end(), "wife: Wife");
    }
}
