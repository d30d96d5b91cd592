//! Tests for flatten/resolve over the built-in taxonomy

use rstest::{fixture, rstest};

use relcat::domain::{flatten, resolve, resolve_label, taxonomy, CategoryNode};
use relcat::util::testing;

#[fixture]
fn tree() -> CategoryNode {
    testing::init_test_setup();
    taxonomy::builtin()
}

fn collect_leaves(node: &CategoryNode, path: &str, out: &mut Vec<(String, String)>) {
    match node {
        CategoryNode::Leaf(label) => out.push((path.to_string(), label.clone())),
        CategoryNode::Branch(children) => {
            for (key, child) in children {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                collect_leaves(child, &child_path, out);
            }
        }
    }
}

// ============================================================
// flatten
// ============================================================

#[rstest]
fn given_builtin_when_flattening_then_one_entry_per_leaf(tree: CategoryNode) {
    let index = flatten(&tree);

    let mut leaves = Vec::new();
    collect_leaves(&tree, "", &mut leaves);

    assert_eq!(index.len(), leaves.len());
    assert_eq!(index.len(), tree.leaf_count());
    for (path, label) in &leaves {
        assert_eq!(index.get(path), Some(label), "path {path}");
    }
}

#[rstest]
fn given_builtin_when_flattening_then_no_branch_appears_as_key(tree: CategoryNode) {
    let index = flatten(&tree);
    assert!(!index.contains_key("personal"));
    assert!(!index.contains_key("serviceProviders.health"));
    assert!(!index.contains_key("personal.family.immediate.spouse"));
}

#[rstest]
#[case("personal.family.immediate.spouse.wife", "Wife")]
#[case("personal.family.immediate.siblings.brother", "Brother")]
#[case("serviceProviders.health.medical.dentist", "Dentist")]
fn given_builtin_when_flattening_then_paths_are_dotted(
    tree: CategoryNode,
    #[case] path: &str,
    #[case] label: &str,
) {
    assert_eq!(flatten(&tree).get(path).map(String::as_str), Some(label));
}

#[rstest]
fn given_same_tree_when_flattening_twice_then_results_are_identical(tree: CategoryNode) {
    assert_eq!(flatten(&tree), flatten(&tree));
}

// ============================================================
// resolve
// ============================================================

#[rstest]
fn given_every_flat_path_when_resolving_then_returns_matching_leaf(tree: CategoryNode) {
    for (path, label) in flatten(&tree) {
        let node = resolve(&tree, &path).expect("flattened path resolves");
        assert_eq!(node, &CategoryNode::Leaf(label));
    }
}

#[rstest]
#[case("invalid.path")]
#[case("invalid")]
#[case("")]
#[case("personal.family.immediate.spouse.wife.extra")]
#[case("serviceproviders.health")]
fn given_unreachable_path_when_resolving_then_not_found(tree: CategoryNode, #[case] path: &str) {
    assert!(resolve(&tree, path).is_none());
}

#[rstest]
fn given_health_path_when_resolving_then_returns_health_subtree(tree: CategoryNode) {
    let health = resolve(&tree, "serviceProviders.health").unwrap();
    let children = health.children().unwrap();

    assert!(children.contains_key("medical"));
    assert!(children.contains_key("wellness"));
    assert_eq!(resolve_label(health, "medical.doctor"), Some("Doctor"));
    assert_eq!(resolve_label(health, "medical.dentist"), Some("Dentist"));
    assert_eq!(
        resolve_label(health, "wellness.personalTrainer"),
        Some("Personal Trainer")
    );
}

#[rstest]
fn given_family_path_when_resolving_then_returns_immediate_and_extended(tree: CategoryNode) {
    let family = resolve(&tree, "personal.family").unwrap();
    let children = family.children().unwrap();
    assert_eq!(children.len(), 2);
    assert!(resolve(family, "immediate.spouse").is_some());
    assert!(resolve(family, "immediate.siblings").is_some());
    assert!(resolve(family, "extended").is_some());
}

#[rstest]
fn given_medical_path_when_resolving_then_lists_medical_providers(tree: CategoryNode) {
    let medical = resolve(&tree, "serviceProviders.health.medical").unwrap();
    assert_eq!(resolve_label(medical, "doctor"), Some("Doctor"));
    assert_eq!(resolve_label(medical, "dentist"), Some("Dentist"));
    assert_eq!(resolve_label(medical, "therapist"), Some("Therapist"));
}

#[rstest]
fn given_deep_path_when_resolving_then_returns_siblings(tree: CategoryNode) {
    let siblings = resolve(&tree, "personal.family.immediate.siblings").unwrap();
    assert_eq!(resolve_label(siblings, "brother"), Some("Brother"));
    assert_eq!(resolve_label(siblings, "sister"), Some("Sister"));
}

#[rstest]
#[case("personal", &["family", "friends"])]
#[case("professional", &["business", "work"])]
#[case(
    "serviceProviders",
    &["education", "financial", "health", "home", "legal", "personal"]
)]
#[case("community", &["civic", "religious", "social"])]
fn given_top_level_category_when_resolving_then_has_expected_children(
    tree: CategoryNode,
    #[case] path: &str,
    #[case] expected: &[&str],
) {
    let node = resolve(&tree, path).unwrap();
    let keys: Vec<&str> = node.children().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, expected);
}
