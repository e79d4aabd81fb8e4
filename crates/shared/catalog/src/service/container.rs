//! Service Container - Centralized service access.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use domain::{Brand, Store, User};

use super::{CatalogManager, CatalogService};
use crate::repository::{BrandStore, StoreStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn CatalogService<User>>;

    /// Get store service
    fn stores(&self) -> Arc<dyn CatalogService<Store>>;

    /// Get brand service
    fn brands(&self) -> Arc<dyn CatalogService<Brand>>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn CatalogService<User>>,
    store_service: Arc<dyn CatalogService<Store>>,
    brand_service: Arc<dyn CatalogService<Brand>>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        user_service: Arc<dyn CatalogService<User>>,
        store_service: Arc<dyn CatalogService<Store>>,
        brand_service: Arc<dyn CatalogService<Brand>>,
    ) -> Self {
        Self {
            user_service,
            store_service,
            brand_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let store_repo = Arc::new(StoreStore::new(db.clone()));
        let brand_repo = Arc::new(BrandStore::new(db));

        Self {
            user_service: Arc::new(CatalogManager::<User>::new(user_repo)),
            store_service: Arc::new(CatalogManager::<Store>::new(store_repo)),
            brand_service: Arc::new(CatalogManager::<Brand>::new(brand_repo)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn CatalogService<User>> {
        self.user_service.clone()
    }

    fn stores(&self) -> Arc<dyn CatalogService<Store>> {
        self.store_service.clone()
    }

    fn brands(&self) -> Arc<dyn CatalogService<Brand>> {
        self.brand_service.clone()
    }
}
