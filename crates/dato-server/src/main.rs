use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{InMemoryDatoRepository, PgDatoRepository};
use application::{CreateDato, ListDatos};
use config::{ServerConfig, StorageBackend};
use dato::DatoRepository;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub create_dato: Arc<CreateDato<dyn DatoRepository>>,
    pub list_datos: Arc<ListDatos<dyn DatoRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn DatoRepository>) -> Self {
        Self {
            create_dato: Arc::new(CreateDato::new(repo.clone())),
            list_datos: Arc::new(ListDatos::new(repo)),
        }
    }
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is running", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Dato API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::dato::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Dato API initializing...");

    let config = ServerConfig::from_secrets(&secrets).map_err(shuttle_runtime::CustomError::new)?;
    tracing::info!("Storage backend: {}", config.storage);

    let repo: Arc<dyn DatoRepository> = match config.storage {
        StorageBackend::Postgres => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .map_err(shuttle_runtime::CustomError::new)?;

            tracing::info!("Database migrations completed");
            Arc::new(PgDatoRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("In-memory storage - datos are lost on restart");
            Arc::new(InMemoryDatoRepository::new())
        }
    };

    let router = build_router(AppState::new(repo));

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Dato API ready");

    Ok(router.into())
}
