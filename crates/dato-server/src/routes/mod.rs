//! Dato API Routes
//!
//! - /datos - Dato creation and listing
//! - /swagger-ui - OpenAPI documentation

pub mod dato;
pub mod swagger;
