//! Person relationship ledger.
//!
//! A `Person` owns an append-only list of `RelationshipRecord`s. Records are
//! added by resolving a relationship path against a category tree; lookups
//! filter on the record's `category` by plain string prefix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::navigator::resolve;
use crate::domain::node::CategoryNode;

/// One relationship held by a person.
///
/// `category` is a free-form dotted path supplied by the caller; it is not
/// checked against the tree and need not match the path that produced
/// `relationship`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRecord {
    pub person_name: String,
    pub relationship: String,
    pub category: String,
}

impl RelationshipRecord {
    pub fn new(
        person_name: impl Into<String>,
        relationship: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            relationship: relationship.into(),
            category: category.into(),
        }
    }
}

/// A named subject and the relationships recorded for them, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationships: Vec::new(),
        }
    }

    /// Append a record whose label is the leaf at `relationship_path`.
    ///
    /// Returns `false` and leaves the ledger untouched when the path does not
    /// resolve or resolves to a category rather than a label.
    pub fn add_relationship(
        &mut self,
        tree: &CategoryNode,
        new_person_name: &str,
        relationship_path: &str,
        category_path: &str,
    ) -> bool {
        self.try_add_relationship(tree, new_person_name, relationship_path, category_path)
            .is_ok()
    }

    /// Like [`Person::add_relationship`], but reports why the append failed.
    pub fn try_add_relationship(
        &mut self,
        tree: &CategoryNode,
        new_person_name: &str,
        relationship_path: &str,
        category_path: &str,
    ) -> Result<&RelationshipRecord, DomainError> {
        let label = match resolve(tree, relationship_path) {
            Some(CategoryNode::Leaf(label)) => label.clone(),
            Some(CategoryNode::Branch(_)) => {
                return Err(DomainError::NotALeaf(relationship_path.to_string()))
            }
            None => return Err(DomainError::PathNotFound(relationship_path.to_string())),
        };

        debug!(
            "add_relationship: person={:?} new={:?} label={:?} category={:?}",
            self.name, new_person_name, label, category_path
        );
        self.relationships.push(RelationshipRecord::new(
            new_person_name,
            label,
            category_path,
        ));
        Ok(&self.relationships[self.relationships.len() - 1])
    }

    /// Records whose `category` starts with `category_path`, in insertion order.
    ///
    /// The match is a raw string prefix, not segment-aware: `"personal.fam"`
    /// also matches `"personal.family2"`. Pass prefixes that end on a segment
    /// boundary to avoid that.
    pub fn find_relationships_by_category(&self, category_path: &str) -> Vec<&RelationshipRecord> {
        self.relationships
            .iter()
            .filter(|r| r.category.starts_with(category_path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> CategoryNode {
        CategoryNode::branch([(
            "home",
            CategoryNode::branch([("contractor", CategoryNode::leaf("Contractor"))]).unwrap(),
        )])
        .unwrap()
    }

    #[test]
    fn given_leaf_path_when_try_adding_then_returns_appended_record() {
        let mut person = Person::new("John Doe");
        let record = person
            .try_add_relationship(&tree(), "Bob", "home.contractor", "anything.goes")
            .unwrap();
        assert_eq!(
            record,
            &RelationshipRecord::new("Bob", "Contractor", "anything.goes")
        );
        assert_eq!(person.relationships.len(), 1);
    }

    #[test]
    fn given_branch_path_when_try_adding_then_reports_not_a_leaf() {
        let mut person = Person::new("John Doe");
        let err = person
            .try_add_relationship(&tree(), "Bob", "home", "home")
            .unwrap_err();
        assert_eq!(err, DomainError::NotALeaf("home".to_string()));
        assert!(person.relationships.is_empty());
    }

    #[test]
    fn given_missing_path_when_try_adding_then_reports_not_found() {
        let mut person = Person::new("John Doe");
        let err = person
            .try_add_relationship(&tree(), "Bob", "home.plumber", "home")
            .unwrap_err();
        assert_eq!(err, DomainError::PathNotFound("home.plumber".to_string()));
    }

    #[test]
    fn given_prefix_without_segment_boundary_when_finding_then_matches_across_segments() {
        let mut person = Person::new("John Doe");
        person
            .relationships
            .push(RelationshipRecord::new("A", "X", "personal.family2"));
        person
            .relationships
            .push(RelationshipRecord::new("B", "Y", "personal.friends"));

        let found = person.find_relationships_by_category("personal.fam");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].person_name, "A");
    }

    #[test]
    fn given_empty_prefix_when_finding_then_returns_everything() {
        let mut person = Person::new("John Doe");
        person.relationships.push(RelationshipRecord::new("A", "X", "a"));
        person.relationships.push(RelationshipRecord::new("B", "Y", "b"));
        assert_eq!(person.find_relationships_by_category("").len(), 2);
    }
}
