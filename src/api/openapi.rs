//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    category_handler, currency_handler, cycle_handler, health_handler, subscription_handler,
};
use crate::domain::{Category, Currency, Cycle};

/// OpenAPI documentation for the subscription tracker
///
/// Every response is HTTP 200 wrapping `{status, error, data}`; the
/// schemas below describe `data`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Subscriptions API",
        description = "Track recurring subscriptions with their categories, billing cycles and currencies",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health_handler::health,
        // Category endpoints
        category_handler::create_category,
        category_handler::get_category,
        category_handler::list_categories,
        category_handler::update_category,
        category_handler::delete_category,
        // Currency endpoints
        currency_handler::create_currency,
        currency_handler::get_currency,
        currency_handler::list_currencies,
        currency_handler::update_currency,
        currency_handler::delete_currency,
        // Cycle endpoints
        cycle_handler::create_cycle,
        cycle_handler::get_cycle,
        cycle_handler::list_cycles,
        cycle_handler::update_cycle,
        cycle_handler::delete_cycle,
        // Subscription endpoints
        subscription_handler::create_subscription,
        subscription_handler::get_subscription,
        subscription_handler::list_subscriptions,
        subscription_handler::update_subscription,
        subscription_handler::delete_subscription,
    ),
    components(
        schemas(
            // Domain types
            Category,
            Currency,
            Cycle,
            // Request and response types
            health_handler::HealthResponse,
            category_handler::CategoryRequest,
            currency_handler::CreateCurrencyRequest,
            currency_handler::UpdateCurrencyRequest,
            cycle_handler::CycleRequest,
            subscription_handler::SubscriptionRequest,
            subscription_handler::SubscriptionResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Categories", description = "Subscription categories"),
        (name = "Currencies", description = "Currencies keyed by code"),
        (name = "Cycles", description = "Billing cycles"),
        (name = "Subscriptions", description = "Tracked subscriptions")
    )
)]
pub struct ApiDoc;
