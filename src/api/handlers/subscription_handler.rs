//! Subscription handlers.
//!
//! Create and update resolve the referenced category, cycle and
//! currency before the record is built; a missing reference surfaces
//! as that entity's not-found error.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::parse_id;
use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{format_payment_date, parse_payment_date, EntityKind, Subscription};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Subscription create/update request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscriptionRequest {
    #[schema(example = "Netflix")]
    pub name: String,
    pub note: String,
    pub logo: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = 1)]
    pub category_id: u64,
    #[schema(example = 2)]
    pub cycle_id: u64,
    /// Currency code
    #[schema(example = "USD")]
    pub currency: String,
    /// `YYYY-MM-DD`
    #[schema(example = "2030-01-15")]
    pub next_payment_date: String,
}

/// Subscription as returned to clients, references flattened to keys
#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: u64,
    pub name: String,
    pub note: String,
    pub logo: String,
    pub price: f64,
    pub category_id: u64,
    pub cycle_id: u64,
    pub currency: String,
    #[schema(example = "2030-01-15")]
    pub next_payment_date: String,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(s: Subscription) -> Self {
        Self {
            id: s.id,
            name: s.name,
            note: s.note,
            logo: s.logo,
            price: s.price,
            category_id: s.category.id,
            cycle_id: s.cycle.id,
            currency: s.currency.code,
            next_payment_date: format_payment_date(s.next_payment_date),
        }
    }
}

/// Create subscription routes
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/subscription", post(create_subscription))
        .route(
            "/subscription/:id",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .route("/subscriptions", get(list_subscriptions))
}

/// Parse the date, then resolve references, in that order.
async fn build_subscription(
    state: &AppState,
    id: u64,
    payload: SubscriptionRequest,
) -> AppResult<Subscription> {
    let next_payment_date = parse_payment_date(&payload.next_payment_date)?;

    let category = state.category_service.get(&payload.category_id).await?;
    let cycle = state.cycle_service.get(&payload.cycle_id).await?;
    let currency = state.currency_service.get(&payload.currency).await?;

    Ok(Subscription {
        id,
        name: payload.name,
        note: payload.note,
        logo: payload.logo,
        price: payload.price,
        category,
        currency,
        cycle,
        next_payment_date,
    })
}

/// Create a subscription
#[utoipa::path(
    post,
    path = "/api/subscription",
    tag = "Subscriptions",
    request_body = SubscriptionRequest,
    responses(
        (status = 200, description = "Envelope carrying the created subscription", body = SubscriptionResponse)
    )
)]
pub async fn create_subscription(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SubscriptionRequest>,
) -> AppResult<ApiResponse<SubscriptionResponse>> {
    let subscription = build_subscription(&state, 0, payload).await?;
    let subscription = state.subscription_service.create(subscription).await?;

    Ok(ApiResponse::success(subscription.into()))
}

/// Get a subscription by id
#[utoipa::path(
    get,
    path = "/api/subscription/{id}",
    tag = "Subscriptions",
    params(("id" = u64, Path, description = "Subscription id")),
    responses(
        (status = 200, description = "Envelope carrying the subscription", body = SubscriptionResponse)
    )
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<SubscriptionResponse>> {
    let id = parse_id(&id, EntityKind::Subscription)?;
    let subscription = state.subscription_service.get(&id).await?;

    Ok(ApiResponse::success(subscription.into()))
}

/// List all subscriptions
#[utoipa::path(
    get,
    path = "/api/subscriptions",
    tag = "Subscriptions",
    responses(
        (status = 200, description = "Envelope carrying every subscription", body = [SubscriptionResponse])
    )
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<SubscriptionResponse>>> {
    let subscriptions = state.subscription_service.list().await?;

    Ok(ApiResponse::success(
        subscriptions.into_iter().map(SubscriptionResponse::from).collect(),
    ))
}

/// Replace a subscription
#[utoipa::path(
    put,
    path = "/api/subscription/{id}",
    tag = "Subscriptions",
    params(("id" = u64, Path, description = "Subscription id")),
    request_body = SubscriptionRequest,
    responses(
        (status = 200, description = "Envelope carrying the updated subscription", body = SubscriptionResponse)
    )
)]
pub async fn update_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<SubscriptionRequest>,
) -> AppResult<ApiResponse<SubscriptionResponse>> {
    let id = parse_id(&id, EntityKind::Subscription)?;

    let existing = state.subscription_service.get(&id).await?;
    let subscription = build_subscription(&state, existing.id, payload).await?;
    let subscription = state.subscription_service.update(subscription).await?;

    Ok(ApiResponse::success(subscription.into()))
}

/// Delete a subscription
#[utoipa::path(
    delete,
    path = "/api/subscription/{id}",
    tag = "Subscriptions",
    params(("id" = u64, Path, description = "Subscription id")),
    responses(
        (status = 200, description = "Success envelope without data")
    )
)]
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let id = parse_id(&id, EntityKind::Subscription)?;
    state.subscription_service.delete(&id).await?;

    Ok(ApiResponse::empty())
}
