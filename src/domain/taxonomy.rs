//! Built-in relationship taxonomy.
//!
//! Four top-level categories: `personal`, `professional`, `serviceProviders`
//! and `community`. The tree is rebuilt from a static table on each call and
//! handed out by value; callers share it by reference.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;
use crate::domain::node::{validate_segment, CategoryNode, PATH_SEPARATOR};

/// Top-level categories of the built-in taxonomy.
pub const TOP_LEVEL: [&str; 4] = ["personal", "professional", "serviceProviders", "community"];

const BUILTIN: &[(&str, &str)] = &[
    ("personal.family.immediate.spouse.husband", "Husband"),
    ("personal.family.immediate.spouse.wife", "Wife"),
    ("personal.family.immediate.spouse.partner", "Partner"),
    ("personal.family.immediate.children.son", "Son"),
    ("personal.family.immediate.children.daughter", "Daughter"),
    ("personal.family.immediate.children.stepson", "Step-son"),
    ("personal.family.immediate.children.stepdaughter", "Step-daughter"),
    ("personal.family.immediate.parents.father", "Father"),
    ("personal.family.immediate.parents.mother", "Mother"),
    ("personal.family.immediate.parents.stepfather", "Step-father"),
    ("personal.family.immediate.parents.stepmother", "Step-mother"),
    ("personal.family.immediate.siblings.brother", "Brother"),
    ("personal.family.immediate.siblings.sister", "Sister"),
    ("personal.family.immediate.siblings.halfBrother", "Half-brother"),
    ("personal.family.immediate.siblings.halfSister", "Half-sister"),
    ("personal.family.immediate.siblings.stepBrother", "Step-brother"),
    ("personal.family.immediate.siblings.stepSister", "Step-sister"),
    ("personal.family.extended.grandparents.grandfather", "Grandfather"),
    ("personal.family.extended.grandparents.grandmother", "Grandmother"),
    ("personal.family.extended.grandparents.maternalGrandfather", "Maternal Grandfather"),
    ("personal.family.extended.grandparents.maternalGrandmother", "Maternal Grandmother"),
    ("personal.family.extended.grandparents.paternalGrandfather", "Paternal Grandfather"),
    ("personal.family.extended.grandparents.paternalGrandmother", "Paternal Grandmother"),
    ("personal.family.extended.auntsUncles.aunt", "Aunt"),
    ("personal.family.extended.auntsUncles.uncle", "Uncle"),
    ("personal.family.extended.auntsUncles.maternalAunt", "Maternal Aunt"),
    ("personal.family.extended.auntsUncles.maternalUncle", "Maternal Uncle"),
    ("personal.family.extended.auntsUncles.paternalAunt", "Paternal Aunt"),
    ("personal.family.extended.auntsUncles.paternalUncle", "Paternal Uncle"),
    ("personal.family.extended.cousins.cousin", "Cousin"),
    ("personal.family.extended.cousins.firstCousin", "First Cousin"),
    ("personal.family.extended.cousins.secondCousin", "Second Cousin"),
    ("personal.family.extended.inLaws.fatherInLaw", "Father-in-law"),
    ("personal.family.extended.inLaws.motherInLaw", "Mother-in-law"),
    ("personal.family.extended.inLaws.brotherInLaw", "Brother-in-law"),
    ("personal.family.extended.inLaws.sisterInLaw", "Sister-in-law"),
    ("personal.friends.close.bestFriend", "Best Friend"),
    ("personal.friends.close.closeFriend", "Close Friend"),
    ("personal.friends.social.friend", "Friend"),
    ("personal.friends.social.acquaintance", "Acquaintance"),
    ("personal.friends.social.neighbor", "Neighbor"),
    ("personal.friends.social.colleague", "Colleague"),
    ("professional.work.supervisor.manager", "Manager"),
    ("professional.work.supervisor.director", "Director"),
    ("professional.work.supervisor.ceo", "CEO"),
    ("professional.work.supervisor.supervisor", "Supervisor"),
    ("professional.work.subordinate.employee", "Employee"),
    ("professional.work.subordinate.intern", "Intern"),
    ("professional.work.subordinate.assistant", "Assistant"),
    ("professional.work.peer.coworker", "Coworker"),
    ("professional.work.peer.colleague", "Colleague"),
    ("professional.work.peer.teammate", "Teammate"),
    ("professional.business.client.customer", "Customer"),
    ("professional.business.client.client", "Client"),
    ("professional.business.client.account", "Account"),
    ("professional.business.partner.businessPartner", "Business Partner"),
    ("professional.business.partner.investor", "Investor"),
    ("professional.business.partner.shareholder", "Shareholder"),
    ("professional.business.vendor.supplier", "Supplier"),
    ("professional.business.vendor.vendor", "Vendor"),
    ("professional.business.vendor.contractor", "Contractor"),
    ("serviceProviders.health.medical.doctor", "Doctor"),
    ("serviceProviders.health.medical.dentist", "Dentist"),
    ("serviceProviders.health.medical.specialist", "Medical Specialist"),
    ("serviceProviders.health.medical.therapist", "Therapist"),
    ("serviceProviders.health.medical.psychiatrist", "Psychiatrist"),
    ("serviceProviders.health.medical.psychologist", "Psychologist"),
    ("serviceProviders.health.wellness.personalTrainer", "Personal Trainer"),
    ("serviceProviders.health.wellness.nutritionist", "Nutritionist"),
    ("serviceProviders.health.wellness.massageTherapist", "Massage Therapist"),
    ("serviceProviders.health.wellness.chiropractor", "Chiropractor"),
    ("serviceProviders.legal.lawyer", "Lawyer"),
    ("serviceProviders.legal.attorney", "Attorney"),
    ("serviceProviders.legal.paralegal", "Paralegal"),
    ("serviceProviders.legal.notary", "Notary"),
    ("serviceProviders.financial.accountant", "Accountant"),
    ("serviceProviders.financial.financialAdvisor", "Financial Advisor"),
    ("serviceProviders.financial.taxPreparer", "Tax Preparer"),
    ("serviceProviders.financial.insuranceAgent", "Insurance Agent"),
    ("serviceProviders.financial.banker", "Banker"),
    ("serviceProviders.home.realtor", "Realtor"),
    ("serviceProviders.home.contractor", "Contractor"),
    ("serviceProviders.home.plumber", "Plumber"),
    ("serviceProviders.home.electrician", "Electrician"),
    ("serviceProviders.home.landscaper", "Landscaper"),
    ("serviceProviders.home.housekeeper", "Housekeeper"),
    ("serviceProviders.education.teacher", "Teacher"),
    ("serviceProviders.education.professor", "Professor"),
    ("serviceProviders.education.tutor", "Tutor"),
    ("serviceProviders.education.mentor", "Mentor"),
    ("serviceProviders.education.coach", "Coach"),
    ("serviceProviders.personal.hairdresser", "Hairdresser"),
    ("serviceProviders.personal.stylist", "Stylist"),
    ("serviceProviders.personal.tailor", "Tailor"),
    ("serviceProviders.personal.photographer", "Photographer"),
    ("serviceProviders.personal.personalAssistant", "Personal Assistant"),
    ("community.religious.pastor", "Pastor"),
    ("community.religious.priest", "Priest"),
    ("community.religious.rabbi", "Rabbi"),
    ("community.religious.imam", "Imam"),
    ("community.religious.congregationMember", "Congregation Member"),
    ("community.civic.electedOfficial", "Elected Official"),
    ("community.civic.communityLeader", "Community Leader"),
    ("community.civic.volunteer", "Volunteer"),
    ("community.civic.activist", "Activist"),
    ("community.social.clubMember", "Club Member"),
    ("community.social.organizationMember", "Organization Member"),
    ("community.social.alumni", "Alumni"),
];

/// The standard relationship taxonomy.
pub fn builtin() -> CategoryNode {
    from_entries(BUILTIN.iter().copied()).expect("built-in taxonomy table is well-formed")
}

/// Build a tree from `(path, label)` entries.
///
/// Fails if a segment is invalid, or if one entry would place a node below
/// another entry's leaf (or a leaf onto an existing branch).
pub fn from_entries<'a, I>(entries: I) -> Result<CategoryNode, DomainError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut root = BTreeMap::new();
    for (path, label) in entries {
        insert(&mut root, path, label)?;
    }
    Ok(CategoryNode::Branch(root))
}

fn insert(
    root: &mut BTreeMap<String, CategoryNode>,
    path: &str,
    label: &str,
) -> Result<(), DomainError> {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    for segment in &segments {
        validate_segment(segment)?;
    }
    let Some((last, parents)) = segments.split_last() else {
        return Err(DomainError::PathConflict(path.to_string()));
    };

    let mut children = root;
    for segment in parents {
        let node = children
            .entry(segment.to_string())
            .or_insert_with(|| CategoryNode::Branch(BTreeMap::new()));
        children = match node {
            CategoryNode::Branch(map) => map,
            CategoryNode::Leaf(_) => return Err(DomainError::PathConflict(path.to_string())),
        };
    }

    if matches!(children.get(*last), Some(CategoryNode::Branch(_))) {
        return Err(DomainError::PathConflict(path.to_string()));
    }
    children.insert(last.to_string(), CategoryNode::leaf(label));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigator::{flatten, resolve_label};
    use rstest::rstest;

    #[test]
    fn given_builtin_when_inspecting_root_then_has_four_top_level_categories() {
        let tree = builtin();
        let children = tree.children().unwrap();
        assert_eq!(children.len(), TOP_LEVEL.len());
        for name in TOP_LEVEL {
            assert!(children.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn given_builtin_when_flattening_then_every_table_entry_is_present() {
        let index = flatten(&builtin());
        assert_eq!(index.len(), BUILTIN.len());
        for (path, label) in BUILTIN {
            assert_eq!(index.get(*path).map(String::as_str), Some(*label));
        }
    }

    #[rstest]
    #[case("personal.family.immediate.spouse.wife", "Wife")]
    #[case("personal.family.immediate.siblings.brother", "Brother")]
    #[case("serviceProviders.health.medical.dentist", "Dentist")]
    #[case("serviceProviders.health.wellness.personalTrainer", "Personal Trainer")]
    #[case("serviceProviders.home.contractor", "Contractor")]
    #[case("professional.work.peer.coworker", "Coworker")]
    #[case("professional.business.vendor.contractor", "Contractor")]
    #[case("community.social.alumni", "Alumni")]
    fn given_builtin_when_resolving_known_path_then_returns_label(
        #[case] path: &str,
        #[case] label: &str,
    ) {
        assert_eq!(resolve_label(&builtin(), path), Some(label));
    }

    #[test]
    fn given_entry_below_leaf_when_building_then_reports_conflict() {
        let result = from_entries([("a.b", "B"), ("a.b.c", "C")]);
        assert_eq!(result, Err(DomainError::PathConflict("a.b.c".to_string())));
    }

    #[test]
    fn given_leaf_over_branch_when_building_then_reports_conflict() {
        let result = from_entries([("a.b.c", "C"), ("a.b", "B")]);
        assert_eq!(result, Err(DomainError::PathConflict("a.b".to_string())));
    }

    #[test]
    fn given_empty_segment_when_building_then_rejects_entry() {
        let result = from_entries([("a..b", "B")]);
        assert!(matches!(result, Err(DomainError::InvalidSegment { .. })));
    }
}
