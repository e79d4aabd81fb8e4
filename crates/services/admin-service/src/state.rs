//! Application state for dependency injection.

use std::sync::Arc;

use axum::extract::FromRef;

use catalog::health::HealthChecker;
use catalog::service::{CatalogService, ServiceContainer};
use catalog::Catalog;
use domain::{Brand, Store, User};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn CatalogService<User>>,
    pub stores: Arc<dyn CatalogService<Store>>,
    pub brands: Arc<dyn CatalogService<Brand>>,
    pub health: HealthChecker,
}

impl AppState {
    /// Create new app state.
    pub fn new(catalog: &Catalog) -> Self {
        let services = catalog.services();
        Self {
            users: services.users(),
            stores: services.stores(),
            brands: services.brands(),
            health: catalog.health(),
        }
    }
}

// Lets generic handlers pull the service for their record type
impl FromRef<AppState> for Arc<dyn CatalogService<User>> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CatalogService<Store>> {
    fn from_ref(state: &AppState) -> Self {
        state.stores.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CatalogService<Brand>> {
    fn from_ref(state: &AppState) -> Self {
        state.brands.clone()
    }
}
