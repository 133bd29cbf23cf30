//! PostgreSQL Repository Implementations

mod dato_repository;

pub use dato_repository::PgDatoRepository;
