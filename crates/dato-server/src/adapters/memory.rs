//! In-memory implementation of DatoRepository
//!
//! Backs tests and `STORAGE_BACKEND=memory` deployments. Contents are lost
//! when the process exits.

use async_trait::async_trait;
use futures::{stream, StreamExt};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use dato::{Dato, DatoRepository, DatoStream, DomainError};

/// Thread-safe in-memory Dato repository, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatoRepository {
    datos: Arc<RwLock<Vec<Dato>>>,
}

impl InMemoryDatoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Repository("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl DatoRepository for InMemoryDatoRepository {
    async fn save(&self, dato: &Dato) -> Result<Dato, DomainError> {
        let stored = Dato {
            id: Some(
                dato.id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
            ),
            information: dato.information.clone(),
        };

        let mut datos = self.datos.write().map_err(poisoned)?;
        match datos.iter_mut().find(|existing| existing.id == stored.id) {
            Some(existing) => *existing = stored.clone(),
            None => datos.push(stored.clone()),
        }

        Ok(stored)
    }

    fn find_all(&self) -> DatoStream<'_> {
        // Snapshot now so later saves don't leak into this listing
        match self.datos.read().map_err(poisoned) {
            Ok(datos) => stream::iter(datos.clone().into_iter().map(Ok)).boxed(),
            Err(e) => stream::iter(vec![Err(e)]).boxed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = InMemoryDatoRepository::new();

        let saved = repo.save(&Dato::new("hello")).await.unwrap();

        assert!(saved.is_persisted());
        assert_eq!(saved.information, "hello");
    }

    #[tokio::test]
    async fn test_save_keeps_given_id_and_replaces_existing() {
        let repo = InMemoryDatoRepository::new();

        repo.save(&Dato::with_id("abc", "first")).await.unwrap();
        let saved = repo.save(&Dato::with_id("abc", "second")).await.unwrap();
        let all: Vec<Dato> = repo.find_all().try_collect().await.unwrap();

        assert_eq!(saved, Dato::with_id("abc", "second"));
        assert_eq!(all, vec![Dato::with_id("abc", "second")]);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = InMemoryDatoRepository::new();

        let first = repo.save(&Dato::new("one")).await.unwrap();
        let second = repo.save(&Dato::new("two")).await.unwrap();
        let all: Vec<Dato> = repo.find_all().try_collect().await.unwrap();

        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_all_is_a_snapshot() {
        let repo = InMemoryDatoRepository::new();
        repo.save(&Dato::new("one")).await.unwrap();

        let listing = repo.find_all();
        repo.save(&Dato::new("two")).await.unwrap();
        let all: Vec<Dato> = listing.try_collect().await.unwrap();

        assert_eq!(all.len(), 1);
    }
}
