//! Service container for dependency injection
//!
//! Wires up the taxonomy and ledger services with their dependencies.

use std::sync::Arc;

use crate::application::services::{LedgerService, TaxonomyService};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Active taxonomy (built-in or `taxonomy_file`)
    pub taxonomy: TaxonomyService,

    /// Person ledger files
    pub ledger: LedgerService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> ApplicationResult<Self> {
        let taxonomy = TaxonomyService::from_settings(fs.as_ref(), &settings)?;
        let ledger = LedgerService::new(Arc::clone(&fs), settings.ledger_dir.clone());
        let settings = Arc::new(settings);

        Ok(Self {
            settings,
            fs,
            taxonomy,
            ledger,
        })
    }
}
