//! Domain layer: taxonomy tree, navigation and the relationship ledger
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod ledger;
pub mod navigator;
pub mod node;
pub mod render;
pub mod taxonomy;

pub use error::DomainError;
pub use ledger::{Person, RelationshipRecord};
pub use navigator::{flatten, flatten_with_prefix, resolve, resolve_label, FlatIndex};
pub use node::{validate_segment, CategoryNode, PATH_SEPARATOR};
pub use render::TreeRender;

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Returns the input unchanged if expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
