//! Application Layer (Use Cases)
//!
//! Orchestrates the mapper and the Dato repository.

pub mod mapper;

mod create_dato;
mod list_datos;

pub use create_dato::CreateDato;
pub use list_datos::ListDatos;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use futures::stream;
    use futures::StreamExt;

    use dato::{Dato, DatoRepository, DatoStream, DomainError};

    /// Repository whose every call fails with the given error
    pub struct FailingRepository(pub DomainError);

    #[async_trait]
    impl DatoRepository for FailingRepository {
        async fn save(&self, _dato: &Dato) -> Result<Dato, DomainError> {
            Err(self.0.clone())
        }

        fn find_all(&self) -> DatoStream<'_> {
            stream::iter(vec![Err(self.0.clone())]).boxed()
        }
    }
}
