//! Currency handlers. Currencies are addressed by code, not by id.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::Currency;
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Currency create request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateCurrencyRequest {
    #[schema(example = "USD")]
    pub code: String,
    #[schema(example = "US Dollar")]
    pub name: String,
    #[schema(example = "$")]
    pub symbol: String,
}

/// Currency update request; the code comes from the path
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCurrencyRequest {
    #[schema(example = "US Dollar")]
    pub name: String,
    #[schema(example = "$")]
    pub symbol: String,
}

/// Create currency routes
pub fn currency_routes() -> Router<AppState> {
    Router::new()
        .route("/currency", post(create_currency))
        .route(
            "/currency/:code",
            get(get_currency).put(update_currency).delete(delete_currency),
        )
        .route("/currencies", get(list_currencies))
}

/// Register a currency
#[utoipa::path(
    post,
    path = "/api/currency",
    tag = "Currencies",
    request_body = CreateCurrencyRequest,
    responses(
        (status = 200, description = "Envelope carrying the created currency", body = Currency)
    )
)]
pub async fn create_currency(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCurrencyRequest>,
) -> AppResult<ApiResponse<Currency>> {
    let currency = state
        .currency_service
        .create(Currency::new(payload.code, payload.name, payload.symbol))
        .await?;

    Ok(ApiResponse::success(currency))
}

/// Get a currency by code
#[utoipa::path(
    get,
    path = "/api/currency/{code}",
    tag = "Currencies",
    params(("code" = String, Path, description = "Currency code")),
    responses(
        (status = 200, description = "Envelope carrying the currency", body = Currency)
    )
)]
pub async fn get_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<ApiResponse<Currency>> {
    let currency = state.currency_service.get(&code).await?;
    Ok(ApiResponse::success(currency))
}

/// List all currencies
#[utoipa::path(
    get,
    path = "/api/currencies",
    tag = "Currencies",
    responses(
        (status = 200, description = "Envelope carrying every currency", body = [Currency])
    )
)]
pub async fn list_currencies(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Currency>>> {
    let currencies = state.currency_service.list().await?;
    Ok(ApiResponse::success(currencies))
}

/// Change the name and symbol of a currency
#[utoipa::path(
    put,
    path = "/api/currency/{code}",
    tag = "Currencies",
    params(("code" = String, Path, description = "Currency code")),
    request_body = UpdateCurrencyRequest,
    responses(
        (status = 200, description = "Envelope carrying the updated currency", body = Currency)
    )
)]
pub async fn update_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
    JsonBody(payload): JsonBody<UpdateCurrencyRequest>,
) -> AppResult<ApiResponse<Currency>> {
    let mut currency = state.currency_service.get(&code).await?;
    currency.name = payload.name;
    currency.symbol = payload.symbol;

    let currency = state.currency_service.update(currency).await?;
    Ok(ApiResponse::success(currency))
}

/// Delete a currency
#[utoipa::path(
    delete,
    path = "/api/currency/{code}",
    tag = "Currencies",
    params(("code" = String, Path, description = "Currency code")),
    responses(
        (status = 200, description = "Success envelope without data")
    )
)]
pub async fn delete_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<ApiResponse<()>> {
    state.currency_service.delete(&code).await?;
    Ok(ApiResponse::empty())
}
