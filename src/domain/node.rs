//! Category tree nodes
//!
//! A taxonomy is a `CategoryNode::Branch` whose children are either further
//! branches or `CategoryNode::Leaf` labels. Keys are path segments; the `.`
//! separator is reserved and never appears inside a segment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Separator between segments of a category path.
pub const PATH_SEPARATOR: char = '.';

/// Node in the category tree.
///
/// Serialized untagged: a string is a leaf label, a table is a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryNode {
    Leaf(String),
    Branch(BTreeMap<String, CategoryNode>),
}

impl CategoryNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        CategoryNode::Leaf(label.into())
    }

    /// Build a branch from `(segment, child)` pairs, validating every segment.
    pub fn branch<K, I>(children: I) -> Result<Self, DomainError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CategoryNode)>,
    {
        let mut map = BTreeMap::new();
        for (key, child) in children {
            let key = key.into();
            validate_segment(&key)?;
            map.insert(key, child);
        }
        Ok(CategoryNode::Branch(map))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CategoryNode::Leaf(_))
    }

    /// Label of a leaf, `None` for a branch.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            CategoryNode::Leaf(label) => Some(label),
            CategoryNode::Branch(_) => None,
        }
    }

    /// Children of a branch, `None` for a leaf.
    pub fn children(&self) -> Option<&BTreeMap<String, CategoryNode>> {
        match self {
            CategoryNode::Leaf(_) => None,
            CategoryNode::Branch(children) => Some(children),
        }
    }

    /// Number of leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            CategoryNode::Leaf(_) => 1,
            CategoryNode::Branch(children) => children.values().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Longest chain of nodes from here to a leaf (a lone leaf has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            CategoryNode::Leaf(_) => 1,
            CategoryNode::Branch(children) => {
                1 + children.values().map(|c| c.depth()).max().unwrap_or(0)
            }
        }
    }

    /// Check every key in the subtree against the segment rules.
    ///
    /// Trees built with [`CategoryNode::branch`] are valid by construction;
    /// deserialized trees must be validated explicitly.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let CategoryNode::Branch(children) = self {
            for (key, child) in children {
                validate_segment(key)?;
                child.validate()?;
            }
        }
        Ok(())
    }
}

/// A segment must be non-empty and must not contain the path separator.
pub fn validate_segment(segment: &str) -> Result<(), DomainError> {
    if segment.is_empty() {
        return Err(DomainError::InvalidSegment {
            segment: segment.to_string(),
            reason: "segment is empty".to_string(),
        });
    }
    if segment.contains(PATH_SEPARATOR) {
        return Err(DomainError::InvalidSegment {
            segment: segment.to_string(),
            reason: format!("segment contains reserved separator '{PATH_SEPARATOR}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryNode {
        CategoryNode::branch([
            (
                "health",
                CategoryNode::branch([
                    ("doctor", CategoryNode::leaf("Doctor")),
                    ("dentist", CategoryNode::leaf("Dentist")),
                ])
                .unwrap(),
            ),
            ("notary", CategoryNode::leaf("Notary")),
        ])
        .unwrap()
    }

    #[test]
    fn given_branch_with_dotted_key_when_building_then_rejects_segment() {
        let result = CategoryNode::branch([("a.b", CategoryNode::leaf("X"))]);
        assert!(matches!(result, Err(DomainError::InvalidSegment { .. })));
    }

    #[test]
    fn given_branch_with_empty_key_when_building_then_rejects_segment() {
        let result = CategoryNode::branch([("", CategoryNode::leaf("X"))]);
        assert!(matches!(result, Err(DomainError::InvalidSegment { .. })));
    }

    #[test]
    fn given_sample_tree_when_counting_then_reports_leaves_and_depth() {
        let tree = sample();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert!(!tree.is_leaf());
        assert!(tree.as_label().is_none());
    }

    #[test]
    fn given_toml_table_when_deserializing_then_builds_branches_and_leaves() {
        let tree: CategoryNode = toml::from_str(
            r#"
notary = "Notary"

[health]
doctor = "Doctor"
"#,
        )
        .unwrap();

        let children = tree.children().unwrap();
        assert_eq!(children["notary"], CategoryNode::leaf("Notary"));
        assert_eq!(
            children["health"].children().unwrap()["doctor"].as_label(),
            Some("Doctor")
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn given_deserialized_tree_with_dotted_key_when_validating_then_fails() {
        let tree: CategoryNode = toml::from_str(
            r#"
[health]
"dr.who" = "Doctor"
"#,
        )
        .unwrap();
        assert!(matches!(
            tree.validate(),
            Err(DomainError::InvalidSegment { .. })
        ));
    }
}
