//! Liveness endpoint.

use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::APP_VERSION;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "pass")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Report that the process is serving
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "pass".to_string(),
        version: APP_VERSION.to_string(),
    })
}
