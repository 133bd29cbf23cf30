//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
///
/// Storage failures are the only error class; they travel from the
/// repository to the caller without translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn repository<E: std::fmt::Display>(err: E) -> Self {
        Self::Repository(err.to_string())
    }
}
