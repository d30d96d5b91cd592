//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid taxonomy {path}: {message}")]
    Taxonomy { path: PathBuf, message: String },

    #[error("invalid ledger {path}: {message}")]
    Ledger { path: PathBuf, message: String },

    #[error("ledger already exists: {0}")]
    LedgerExists(PathBuf),

    #[error("ledger not found: {0}")]
    LedgerNotFound(PathBuf),

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
