//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Dato: an identifier plus an opaque information payload

mod dato;

pub use dato::*;
