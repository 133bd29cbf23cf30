//! Dato Data Models
//!
//! - DatoDto: transport representation of a Dato
//! - CreateDatoResponse: identifier returned on create

mod dato;

pub use self::dato::*;
