//! Application route configuration.

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    category_routes, currency_routes, cycle_routes, health, subscription_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState, read_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(read_timeout))
        .with_state(state)
}

/// Entity routes under `/api`; anything unmatched is not implemented
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(category_routes())
        .merge(currency_routes())
        .merge(cycle_routes())
        .merge(subscription_routes())
        .fallback(not_implemented)
}

async fn not_implemented() -> AppError {
    AppError::NotImplemented
}
