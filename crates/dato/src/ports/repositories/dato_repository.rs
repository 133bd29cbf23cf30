//! Dato Repository Port
//!
//! Abstract interface for Dato persistence operations.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::{errors::DomainError, Dato};

/// Lazy, finite sequence of stored Datos
pub type DatoStream<'a> = BoxStream<'a, Result<Dato, DomainError>>;

/// Repository interface for Dato entities
#[async_trait]
pub trait DatoRepository: Send + Sync {
    /// Save a Dato, assigning an id when it has none.
    ///
    /// Returns the record as persisted.
    async fn save(&self, dato: &Dato) -> Result<Dato, DomainError>;

    /// Stream all Datos in repository-defined order
    fn find_all(&self) -> DatoStream<'_>;
}
