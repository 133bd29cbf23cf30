//! Dato Domain Library
//!
//! Core domain types and interfaces for the Dato record service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: The persisted `Dato` record
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use dato::{Dato, DatoRepository, DomainError};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{Dato, DomainError};
pub use ports::{DatoRepository, DatoStream};
