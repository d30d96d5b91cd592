//! Ledger service
//!
//! Keeps one `Person` per TOML file and applies ledger operations to it.
//!
//! File format:
//! ```toml
//! name = "John Doe"
//!
//! [[relationships]]
//! personName = "Jane Doe"
//! relationship = "Wife"
//! category = "personal.family.immediate.spouse"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{CategoryNode, Person, RelationshipRecord};
use crate::infrastructure::traits::FileSystem;

/// Service for person ledger files.
pub struct LedgerService {
    fs: Arc<dyn FileSystem>,
    ledger_dir: PathBuf,
}

impl LedgerService {
    /// Create a ledger service; bare file names resolve under `ledger_dir`.
    pub fn new(fs: Arc<dyn FileSystem>, ledger_dir: PathBuf) -> Self {
        Self { fs, ledger_dir }
    }

    /// Location of a ledger file.
    ///
    /// A bare relative file name (`john.toml`) lives in the ledger directory;
    /// anything with a directory component is used as given.
    pub fn ledger_path(&self, file: &Path) -> PathBuf {
        let bare = file.is_relative()
            && file
                .parent()
                .map(|p| p.as_os_str().is_empty())
                .unwrap_or(true);
        if bare {
            self.ledger_dir.join(file)
        } else {
            file.to_path_buf()
        }
    }

    /// Create a new, empty ledger for `name`.
    #[instrument(skip(self))]
    pub fn init(&self, file: &Path, name: &str) -> ApplicationResult<PathBuf> {
        let path = self.ledger_path(file);
        if self.fs.exists(&path) {
            return Err(ApplicationError::LedgerExists(path));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .with_path_context("create ledger directory", parent)?;
        }
        self.write(&path, &Person::new(name))?;
        debug!("init: created {}", path.display());
        Ok(path)
    }

    /// Read the person stored in a ledger file.
    pub fn load(&self, file: &Path) -> ApplicationResult<Person> {
        let path = self.ledger_path(file);
        if !self.fs.exists(&path) {
            return Err(ApplicationError::LedgerNotFound(path));
        }
        let content = self
            .fs
            .read_to_string(&path)
            .with_path_context("read ledger", &path)?;
        toml::from_str(&content).map_err(|e| ApplicationError::Ledger {
            path,
            message: e.to_string(),
        })
    }

    /// Overwrite a ledger file with `person`.
    pub fn save(&self, file: &Path, person: &Person) -> ApplicationResult<()> {
        let path = self.ledger_path(file);
        self.write(&path, person)
    }

    fn write(&self, path: &Path, person: &Person) -> ApplicationResult<()> {
        let content = toml::to_string_pretty(person).map_err(|e| ApplicationError::Ledger {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.fs
            .write_atomic(path, &content)
            .with_path_context("write ledger", path)
    }

    /// Resolve `relationship_path` in `tree` and append the record to the ledger.
    ///
    /// The file is only rewritten when the append succeeds.
    #[instrument(skip(self, tree))]
    pub fn add(
        &self,
        file: &Path,
        tree: &CategoryNode,
        person_name: &str,
        relationship_path: &str,
        category_path: &str,
    ) -> ApplicationResult<RelationshipRecord> {
        let mut person = self.load(file)?;
        let record = person
            .try_add_relationship(tree, person_name, relationship_path, category_path)?
            .clone();
        self.save(file, &person)?;
        debug!(
            "add: {} now has {} relationships",
            person.name,
            person.relationships.len()
        );
        Ok(record)
    }

    /// Records in the ledger whose category starts with `prefix`.
    pub fn find(&self, file: &Path, prefix: &str) -> ApplicationResult<Vec<RelationshipRecord>> {
        let person = self.load(file)?;
        Ok(person
            .find_relationships_by_category(prefix)
            .into_iter()
            .cloned()
            .collect())
    }
}
