//! Dato Routes
//!
//! HTTP handlers that delegate to the Dato use cases.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use futures::TryStreamExt;

use dato::DomainError;

use crate::models::{CreateDatoResponse, DatoDto};
use crate::AppState;

fn internal_error(e: DomainError) -> (StatusCode, String) {
    tracing::error!("Dato request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// List all Datos
#[utoipa::path(
    get,
    path = "/datos",
    responses(
        (status = 200, description = "List of all Datos", body = Vec<DatoDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dato"
)]
pub async fn list_datos(
    State(state): State<AppState>,
) -> Result<Json<Vec<DatoDto>>, (StatusCode, String)> {
    let datos: Vec<DatoDto> = state
        .list_datos
        .get()
        .try_collect()
        .await
        .map_err(internal_error)?;

    Ok(Json(datos))
}

/// Create new Dato
#[utoipa::path(
    post,
    path = "/datos",
    request_body = DatoDto,
    responses(
        (status = 201, description = "Dato created", body = CreateDatoResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dato"
)]
pub async fn create_dato(
    State(state): State<AppState>,
    Json(payload): Json<DatoDto>,
) -> Result<(StatusCode, Json<CreateDatoResponse>), (StatusCode, String)> {
    let id = state
        .create_dato
        .apply(payload)
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(CreateDatoResponse { id })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/datos", get(list_datos).post(create_dato))
}
