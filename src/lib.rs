//! Relationship category taxonomy.
//!
//! A static tree of relationship labels addressed by dotted paths
//! (`serviceProviders.health.medical.dentist` → `"Dentist"`), with
//! navigation helpers and a per-person relationship ledger.
//!
//! ```
//! use relcat::domain::{flatten, resolve_label, taxonomy, Person};
//!
//! let tree = taxonomy::builtin();
//! assert_eq!(resolve_label(&tree, "professional.work.peer.coworker"), Some("Coworker"));
//! assert_eq!(flatten(&tree).len(), tree.leaf_count());
//!
//! let mut john = Person::new("John Doe");
//! assert!(john.add_relationship(&tree, "Bob Builder", "serviceProviders.home.contractor", "serviceProviders.home"));
//! assert!(!john.add_relationship(&tree, "X", "serviceProviders.health", "serviceProviders.health"));
//! assert_eq!(john.find_relationships_by_category("serviceProviders").len(), 1);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
