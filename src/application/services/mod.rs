//! Application services

mod ledger;
mod taxonomy;

pub use ledger::LedgerService;
pub use taxonomy::{TaxonomyService, TaxonomySource};
