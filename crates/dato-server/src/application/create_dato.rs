//! Create Dato Use Case
//!
//! Persists a new Dato and returns the id storage assigned to it.

use std::sync::Arc;

use dato::{DatoRepository, DomainError};

use super::mapper;
use crate::models::DatoDto;

/// Application service for creating Datos
pub struct CreateDato<R: DatoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DatoRepository + ?Sized> CreateDato<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Save `dto` as a new Dato.
    ///
    /// Any id on the input is ignored. Repository errors are returned as is.
    pub async fn apply(&self, dto: DatoDto) -> Result<String, DomainError> {
        let dato = mapper::to_dato(None)(dto);
        let saved = self.repo.save(&dato).await?;

        let id = saved
            .id
            .ok_or_else(|| DomainError::Repository("saved record has no id".to_string()))?;

        tracing::info!("Created Dato: {}", id);

        Ok(id)
    }
}
