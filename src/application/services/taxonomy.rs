//! Taxonomy service
//!
//! Provides the active category tree, either the built-in taxonomy or a
//! custom one loaded from a TOML file, and answers path queries against it.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{self, taxonomy, CategoryNode, DomainError, FlatIndex};
use crate::infrastructure::traits::FileSystem;

/// Where the active taxonomy came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomySource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for TaxonomySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxonomySource::Builtin => write!(f, "built-in"),
            TaxonomySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Service answering navigation queries over one immutable tree.
pub struct TaxonomyService {
    tree: CategoryNode,
    source: TaxonomySource,
}

impl TaxonomyService {
    /// Service over the built-in taxonomy.
    pub fn builtin() -> Self {
        Self {
            tree: taxonomy::builtin(),
            source: TaxonomySource::Builtin,
        }
    }

    /// Service over a custom taxonomy file.
    ///
    /// The file is a TOML document of nested tables whose string values are
    /// labels. Keys are validated as path segments.
    #[instrument(skip(fs))]
    pub fn from_file(fs: &dyn FileSystem, path: &Path) -> ApplicationResult<Self> {
        let content = fs
            .read_to_string(path)
            .with_path_context("read taxonomy", path)?;
        let tree: CategoryNode =
            toml::from_str(&content).map_err(|e| ApplicationError::Taxonomy {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tree.validate().map_err(|e| ApplicationError::Taxonomy {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!("from_file: {} leaves", tree.leaf_count());

        Ok(Self {
            tree,
            source: TaxonomySource::File(path.to_path_buf()),
        })
    }

    /// Service over the taxonomy named in settings, built-in when unset.
    pub fn from_settings(fs: &dyn FileSystem, settings: &Settings) -> ApplicationResult<Self> {
        match &settings.taxonomy_file {
            Some(path) => Self::from_file(fs, path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn tree(&self) -> &CategoryNode {
        &self.tree
    }

    pub fn source(&self) -> &TaxonomySource {
        &self.source
    }

    /// Node at `path`; `PathNotFound` when unreachable.
    pub fn resolve(&self, path: &str) -> ApplicationResult<&CategoryNode> {
        domain::resolve(&self.tree, path)
            .ok_or_else(|| DomainError::PathNotFound(path.to_string()).into())
    }

    /// Flat index of the whole tree, or of the subtree under `prefix`.
    ///
    /// Keys are always full paths from the root.
    #[instrument(skip(self))]
    pub fn flatten(&self, prefix: Option<&str>) -> ApplicationResult<FlatIndex> {
        match prefix {
            None | Some("") => Ok(domain::flatten(&self.tree)),
            Some(prefix) => {
                let node = self.resolve(prefix)?;
                Ok(domain::flatten_with_prefix(node, prefix))
            }
        }
    }
}
