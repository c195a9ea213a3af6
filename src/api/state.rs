//! Application state - Dependency injection container.
//!
//! Provides handlers with the CRUD service of every entity.

use std::sync::Arc;

use crate::domain::{Category, Currency, Cycle, Subscription};
use crate::services::{CrudService, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<dyn CrudService<Category>>,
    pub currency_service: Arc<dyn CrudService<Currency>>,
    pub cycle_service: Arc<dyn CrudService<Cycle>>,
    pub subscription_service: Arc<dyn CrudService<Subscription>>,
}

impl AppState {
    /// Create application state from the service container.
    pub fn from_services(services: &Services) -> Self {
        Self {
            category_service: services.categories(),
            currency_service: services.currencies(),
            cycle_service: services.cycles(),
            subscription_service: services.subscriptions(),
        }
    }
}
