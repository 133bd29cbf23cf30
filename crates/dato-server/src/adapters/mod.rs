//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod postgres;

// Re-exports
pub use memory::InMemoryDatoRepository;
pub use postgres::PgDatoRepository;
