//! Integration tests for API endpoints.
//!
//! These drive the full router over in-memory storage; every response,
//! success or failure, is expected to carry HTTP 200 and the JSON
//! envelope.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use subscriptions::api::{create_router, AppState};
use subscriptions::domain::Category;
use subscriptions::errors::{AppError, AppResult};
use subscriptions::infra::Repositories;
use subscriptions::services::{CrudService, Services};

// =============================================================================
// Helpers
// =============================================================================

fn test_app() -> Router {
    let services = Services::from_repositories(Repositories::in_memory());
    create_router(AppState::from_services(&services), Duration::from_secs(15))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> Value {
    let (status, body) = call(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn get(app: &Router, uri: &str) -> Value {
    let (status, body) = call(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    body
}

fn error(message: &str) -> Value {
    json!({"status": "error", "error": message})
}

/// Category 1, cycle 1 (Monthly) and currency USD
async fn seed_references(app: &Router) {
    post(app, "/api/category", json!({"name": "Streaming"})).await;
    post(app, "/api/cycle", json!({"name": "Monthly", "days": 30})).await;
    post(app, "/api/currency", json!({"code": "USD", "name": "US Dollar", "symbol": "$"})).await;
}

fn netflix() -> Value {
    json!({
        "name": "Netflix",
        "price": 9.99,
        "category_id": 1,
        "cycle_id": 1,
        "currency": "USD",
        "next_payment_date": "2030-01-15"
    })
}

// =============================================================================
// Health & routing
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let body = get(&app, "/health").await;

    assert_eq!(
        body,
        json!({"status": "pass", "version": env!("CARGO_PKG_VERSION")})
    );
}

#[tokio::test]
async fn test_unknown_api_route_is_not_implemented() {
    let app = test_app();
    let body = get(&app, "/api/payments").await;

    assert_eq!(body, error("not implemented"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();
    let body = get(&app, "/api-docs/openapi.json").await;

    assert!(body["paths"]["/api/subscription"].is_object());
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_create_category() {
    let app = test_app();
    let body = post(&app, "/api/category", json!({"name": "Test Category"})).await;

    assert_eq!(
        body,
        json!({"status": "success", "data": {"id": 1, "name": "Test Category"}})
    );
}

#[tokio::test]
async fn test_create_category_with_empty_name() {
    let app = test_app();
    let body = post(&app, "/api/category", json!({"name": ""})).await;

    assert_eq!(body, error("the category is not valid"));
    assert_eq!(get(&app, "/api/categories").await, json!({"status": "success", "data": []}));
}

#[tokio::test]
async fn test_delete_missing_category() {
    let app = test_app();
    let (status, body) = call(&app, Method::DELETE, "/api/category/99", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, error("the category was not found in the repository"));
}

#[tokio::test]
async fn test_category_lifecycle() {
    let app = test_app();
    post(&app, "/api/category", json!({"name": "Streaming"})).await;
    post(&app, "/api/category", json!({"name": "Cloud"})).await;

    let (_, updated) = call(
        &app,
        Method::PUT,
        "/api/category/2",
        Some(json!({"name": "Storage"})),
    )
    .await;
    assert_eq!(updated["data"], json!({"id": 2, "name": "Storage"}));

    let list = get(&app, "/api/categories").await;
    assert_eq!(
        list["data"],
        json!([{"id": 1, "name": "Streaming"}, {"id": 2, "name": "Storage"}])
    );

    let (_, deleted) = call(&app, Method::DELETE, "/api/category/1", None).await;
    assert_eq!(deleted, json!({"status": "success"}));
    assert_eq!(
        get(&app, "/api/category/1").await,
        error("the category was not found in the repository")
    );

    // ids are never reissued
    let created = post(&app, "/api/category", json!({"name": "News"})).await;
    assert_eq!(created["data"]["id"], 3);
}

#[tokio::test]
async fn test_update_missing_category() {
    let app = test_app();
    let (_, body) = call(
        &app,
        Method::PUT,
        "/api/category/5",
        Some(json!({"name": "Ghost"})),
    )
    .await;

    assert_eq!(body, error("the category was not found in the repository"));
}

#[tokio::test]
async fn test_bad_path_id_is_enveloped() {
    let app = test_app();
    let body = get(&app, "/api/category/abc").await;

    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "invalid category id: abc");
}

#[tokio::test]
async fn test_malformed_json_is_enveloped() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/category")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "error");
    assert!(body.get("data").is_none());
}

// =============================================================================
// Currencies & cycles
// =============================================================================

#[tokio::test]
async fn test_create_currency_twice() {
    let app = test_app();
    let usd = json!({"code": "USD", "name": "US Dollar", "symbol": "$"});

    let first = post(&app, "/api/currency", usd.clone()).await;
    assert_eq!(first, json!({"status": "success", "data": usd}));

    let second = post(
        &app,
        "/api/currency",
        json!({"code": "USD", "name": "Other", "symbol": "D"}),
    )
    .await;
    assert_eq!(second, error("the currency already exists in the repository"));

    assert_eq!(get(&app, "/api/currency/USD").await["data"]["name"], "US Dollar");
}

#[tokio::test]
async fn test_currency_requires_all_fields() {
    let app = test_app();
    let body = post(&app, "/api/currency", json!({"code": "EUR", "name": "Euro"})).await;

    assert_eq!(body, error("the currency is not valid"));
}

#[tokio::test]
async fn test_update_currency_keeps_code() {
    let app = test_app();
    post(&app, "/api/currency", json!({"code": "RUB", "name": "Ruble", "symbol": "R"})).await;

    let (_, body) = call(
        &app,
        Method::PUT,
        "/api/currency/RUB",
        Some(json!({"name": "Russian Ruble", "symbol": "₽"})),
    )
    .await;

    assert_eq!(
        body["data"],
        json!({"code": "RUB", "name": "Russian Ruble", "symbol": "₽"})
    );
    assert_eq!(get(&app, "/api/currencies").await["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_cycle_lifecycle() {
    let app = test_app();

    let invalid = post(&app, "/api/cycle", json!({"days": 7})).await;
    assert_eq!(invalid, error("the cycle is invalid"));

    let created = post(&app, "/api/cycle", json!({"name": "Weekly", "days": 7})).await;
    assert_eq!(created["data"], json!({"id": 1, "name": "Weekly", "days": 7}));

    let (_, deleted) = call(&app, Method::DELETE, "/api/cycle/1", None).await;
    assert_eq!(deleted, json!({"status": "success"}));
    assert_eq!(get(&app, "/api/cycles").await["data"], json!([]));
}

// =============================================================================
// Subscriptions
// =============================================================================

#[tokio::test]
async fn test_create_subscription() {
    let app = test_app();
    seed_references(&app).await;

    let body = post(&app, "/api/subscription", netflix()).await;

    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": {
                "id": 1,
                "name": "Netflix",
                "note": "",
                "logo": "",
                "price": 9.99,
                "category_id": 1,
                "cycle_id": 1,
                "currency": "USD",
                "next_payment_date": "2030-01-15"
            }
        })
    );
    assert_eq!(get(&app, "/api/subscription/1").await, body);
}

#[tokio::test]
async fn test_subscription_with_bad_date() {
    let app = test_app();
    seed_references(&app).await;

    let mut payload = netflix();
    payload["next_payment_date"] = json!("15/01/2030");
    assert_eq!(
        post(&app, "/api/subscription", payload).await,
        error("invalid payment date")
    );

    let mut payload = netflix();
    payload.as_object_mut().unwrap().remove("next_payment_date");
    assert_eq!(
        post(&app, "/api/subscription", payload).await,
        error("invalid payment date")
    );
}

#[tokio::test]
async fn test_subscription_with_missing_reference() {
    let app = test_app();
    seed_references(&app).await;

    let mut payload = netflix();
    payload["category_id"] = json!(7);
    assert_eq!(
        post(&app, "/api/subscription", payload).await,
        error("the category was not found in the repository")
    );

    let mut payload = netflix();
    payload["currency"] = json!("EUR");
    assert_eq!(
        post(&app, "/api/subscription", payload).await,
        error("the currency was not found in the repository")
    );

    assert_eq!(get(&app, "/api/subscriptions").await["data"], json!([]));
}

#[tokio::test]
async fn test_subscription_with_zero_price() {
    let app = test_app();
    seed_references(&app).await;

    let mut payload = netflix();
    payload["price"] = json!(0);

    assert_eq!(
        post(&app, "/api/subscription", payload).await,
        error("the subscription is invalid")
    );
}

#[tokio::test]
async fn test_update_and_delete_subscription() {
    let app = test_app();
    seed_references(&app).await;
    post(&app, "/api/subscription", netflix()).await;

    let mut payload = netflix();
    payload["price"] = json!(12.5);
    payload["note"] = json!("family plan");
    let (_, updated) = call(&app, Method::PUT, "/api/subscription/1", Some(payload)).await;

    assert_eq!(updated["data"]["id"], 1);
    assert_eq!(updated["data"]["price"], 12.5);
    assert_eq!(updated["data"]["note"], "family plan");

    let (_, missing) = call(&app, Method::PUT, "/api/subscription/9", Some(netflix())).await;
    assert_eq!(missing, error("the subscription was not found in the repository"));

    let (_, deleted) = call(&app, Method::DELETE, "/api/subscription/1", None).await;
    assert_eq!(deleted, json!({"status": "success"}));
}

#[tokio::test]
async fn test_deleting_a_category_keeps_subscriptions() {
    let app = test_app();
    seed_references(&app).await;
    post(&app, "/api/subscription", netflix()).await;

    call(&app, Method::DELETE, "/api/category/1", None).await;

    let body = get(&app, "/api/subscription/1").await;
    assert_eq!(body["data"]["category_id"], 1);
}

// =============================================================================
// Internal errors
// =============================================================================

/// Category service whose store is unavailable
struct BrokenCategories;

#[async_trait]
impl CrudService<Category> for BrokenCategories {
    async fn create(&self, _record: Category) -> AppResult<Category> {
        Err(AppError::internal("category store lock poisoned"))
    }

    async fn get(&self, _key: &u64) -> AppResult<Category> {
        Err(AppError::internal("category store lock poisoned"))
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        Err(AppError::internal("category store lock poisoned"))
    }

    async fn update(&self, _record: Category) -> AppResult<Category> {
        Err(AppError::internal("category store lock poisoned"))
    }

    async fn delete(&self, _key: &u64) -> AppResult<()> {
        Err(AppError::internal("category store lock poisoned"))
    }
}

#[tokio::test]
async fn test_internal_errors_are_hidden() {
    let services = Services::from_repositories(Repositories::in_memory());
    let state = AppState {
        category_service: Arc::new(BrokenCategories),
        ..AppState::from_services(&services)
    };
    let app = create_router(state, Duration::from_secs(15));

    let body = get(&app, "/api/categories").await;

    assert_eq!(body, error("An internal error occurred"));
}
