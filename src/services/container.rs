//! Service Container - Centralized service access.
//!
//! Built once by the composition root from the configured repositories
//! and shared with the HTTP layer through `AppState`.

use std::sync::Arc;

use super::{CrudService, Manager};
use crate::domain::{Category, Currency, Cycle, Subscription};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Concrete service container, one CRUD service per entity
#[derive(Clone)]
pub struct Services {
    category_service: Arc<dyn CrudService<Category>>,
    currency_service: Arc<dyn CrudService<Currency>>,
    cycle_service: Arc<dyn CrudService<Cycle>>,
    subscription_service: Arc<dyn CrudService<Subscription>>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        category_service: Arc<dyn CrudService<Category>>,
        currency_service: Arc<dyn CrudService<Currency>>,
        cycle_service: Arc<dyn CrudService<Cycle>>,
        subscription_service: Arc<dyn CrudService<Subscription>>,
    ) -> Self {
        Self {
            category_service,
            currency_service,
            cycle_service,
            subscription_service,
        }
    }

    /// Wrap each repository in its validating service
    pub fn from_repositories(repos: Repositories) -> Self {
        Self {
            category_service: Arc::new(Manager::new(repos.categories)),
            currency_service: Arc::new(Manager::new(repos.currencies)),
            cycle_service: Arc::new(Manager::new(repos.cycles)),
            subscription_service: Arc::new(Manager::new(repos.subscriptions)),
        }
    }

    pub fn categories(&self) -> Arc<dyn CrudService<Category>> {
        self.category_service.clone()
    }

    pub fn currencies(&self) -> Arc<dyn CrudService<Currency>> {
        self.currency_service.clone()
    }

    pub fn cycles(&self) -> Arc<dyn CrudService<Cycle>> {
        self.cycle_service.clone()
    }

    pub fn subscriptions(&self) -> Arc<dyn CrudService<Subscription>> {
        self.subscription_service.clone()
    }

    /// Create the preset cycles and currencies through the normal
    /// service path. Presets that already exist are skipped.
    pub async fn seed_defaults(&self) -> AppResult<()> {
        for currency in Currency::presets() {
            match self.currency_service.create(currency).await {
                Ok(created) => tracing::info!(code = %created.code, "Seeded currency"),
                Err(AppError::AlreadyExists(_)) => {}
                Err(e) => return Err(e),
            }
        }

        let existing = self.cycle_service.list().await?;
        for cycle in Cycle::presets() {
            if existing.iter().any(|c| c.name == cycle.name) {
                continue;
            }
            let created = self.cycle_service.create(cycle).await?;
            tracing::info!(id = created.id, name = %created.name, "Seeded cycle");
        }

        Ok(())
    }
}
