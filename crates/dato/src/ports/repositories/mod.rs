//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod dato_repository;

pub use dato_repository::*;
