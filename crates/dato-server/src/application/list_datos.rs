//! List Datos Use Case
//!
//! Streams every stored Dato as a transport object.

use std::sync::Arc;

use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};

use dato::{DatoRepository, DomainError};

use super::mapper;
use crate::models::DatoDto;

/// Application service for listing Datos
pub struct ListDatos<R: DatoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DatoRepository + ?Sized> ListDatos<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All Datos in repository order.
    ///
    /// Empty storage yields an empty stream; repository errors are yielded as is.
    pub fn get(&self) -> BoxStream<'_, Result<DatoDto, DomainError>> {
        self.repo.find_all().map_ok(mapper::to_dto()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::adapters::InMemoryDatoRepository;
    use crate::application::testing::FailingRepository;
    use crate::application::CreateDato;

    #[tokio::test]
    async fn test_empty_store_yields_empty_list() {
        let list = ListDatos::new(Arc::new(InMemoryDatoRepository::new()));

        let datos: Vec<DatoDto> = list.get().try_collect().await.unwrap();

        assert!(datos.is_empty());
    }

    #[tokio::test]
    async fn test_lists_created_dato() {
        let repo = Arc::new(InMemoryDatoRepository::new());
        let create = CreateDato::new(repo.clone());
        let list = ListDatos::new(repo);

        let id = create.apply(DatoDto::new(None, "hello")).await.unwrap();
        let datos: Vec<DatoDto> = list.get().try_collect().await.unwrap();

        assert_eq!(datos, vec![DatoDto::new(Some(id), "hello")]);
    }

    #[tokio::test]
    async fn test_lists_every_created_dato() {
        let repo = Arc::new(InMemoryDatoRepository::new());
        let create = CreateDato::new(repo.clone());
        let list = ListDatos::new(repo);

        let first = create.apply(DatoDto::new(None, "one")).await.unwrap();
        let second = create.apply(DatoDto::new(None, "two")).await.unwrap();

        let mut datos: Vec<DatoDto> = list.get().try_collect().await.unwrap();
        datos.sort_by(|a, b| a.information.cmp(&b.information));

        assert_eq!(
            datos,
            vec![
                DatoDto::new(Some(first), "one"),
                DatoDto::new(Some(second), "two"),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_all_error_propagates_unchanged() {
        let error = DomainError::Repository("connection reset".to_string());
        let list = ListDatos::new(Arc::new(FailingRepository(error.clone())));

        let result: Result<Vec<DatoDto>, DomainError> = list.get().try_collect().await;

        assert_eq!(result, Err(error));
    }
}
