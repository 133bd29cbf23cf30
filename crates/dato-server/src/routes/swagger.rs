//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateDatoResponse, DatoDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::dato::list_datos,
        super::dato::create_dato,
    ),
    info(
        title = "Dato API",
        version = "0.1.0",
        description = "Stores opaque information records and lists them back.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dato", description = "Dato - information record management"),
    ),
    components(
        schemas(
            crate::HealthCheck,
            DatoDto,
            CreateDatoResponse,
        )
    ),
)]
pub struct ApiDoc;
