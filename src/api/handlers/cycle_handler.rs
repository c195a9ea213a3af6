//! Billing cycle handlers.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Cycle, EntityKind};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Cycle create/update request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CycleRequest {
    #[schema(example = "Monthly")]
    pub name: String,
    #[schema(example = 30)]
    pub days: u64,
}

/// Create cycle routes
pub fn cycle_routes() -> Router<AppState> {
    Router::new()
        .route("/cycle", post(create_cycle))
        .route(
            "/cycle/:id",
            get(get_cycle).put(update_cycle).delete(delete_cycle),
        )
        .route("/cycles", get(list_cycles))
}

#[utoipa::path(
    post,
    path = "/api/cycle",
    tag = "Cycles",
    request_body = CycleRequest,
    responses(
        (status = 200, description = "Envelope carrying the created cycle", body = Cycle)
    )
)]
pub async fn create_cycle(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CycleRequest>,
) -> AppResult<ApiResponse<Cycle>> {
    let cycle = state
        .cycle_service
        .create(Cycle::new(payload.name, payload.days))
        .await?;

    Ok(ApiResponse::success(cycle))
}

#[utoipa::path(
    get,
    path = "/api/cycle/{id}",
    tag = "Cycles",
    params(("id" = u64, Path, description = "Cycle id")),
    responses(
        (status = 200, description = "Envelope carrying the cycle", body = Cycle)
    )
)]
pub async fn get_cycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Cycle>> {
    let id = parse_id(&id, EntityKind::Cycle)?;
    Ok(ApiResponse::success(state.cycle_service.get(&id).await?))
}

#[utoipa::path(
    get,
    path = "/api/cycles",
    tag = "Cycles",
    responses(
        (status = 200, description = "Envelope carrying every cycle", body = [Cycle])
    )
)]
pub async fn list_cycles(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Cycle>>> {
    Ok(ApiResponse::success(state.cycle_service.list().await?))
}

#[utoipa::path(
    put,
    path = "/api/cycle/{id}",
    tag = "Cycles",
    params(("id" = u64, Path, description = "Cycle id")),
    request_body = CycleRequest,
    responses(
        (status = 200, description = "Envelope carrying the updated cycle", body = Cycle)
    )
)]
pub async fn update_cycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CycleRequest>,
) -> AppResult<ApiResponse<Cycle>> {
    let id = parse_id(&id, EntityKind::Cycle)?;

    let mut cycle = state.cycle_service.get(&id).await?;
    cycle.name = payload.name;
    cycle.days = payload.days;

    Ok(ApiResponse::success(state.cycle_service.update(cycle).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cycle/{id}",
    tag = "Cycles",
    params(("id" = u64, Path, description = "Cycle id")),
    responses(
        (status = 200, description = "Success envelope without data")
    )
)]
pub async fn delete_cycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id, EntityKind::Cycle)?;
    state.cycle_service.delete(&id).await?;

    Ok(ApiResponse::empty())
}
