//! Catalog Library
//!
//! Persistence and business logic for users, stores and brands: SeaORM
//! entities and migrations, the generic soft-delete repository, the catalog
//! services and the container the HTTP services draw them from.

pub mod config;
pub mod health;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use crate::config::CatalogConfig;
use crate::health::HealthChecker;
use crate::infra::{CacheState, Database};
use crate::service::Services;

/// Connected infrastructure plus the services built on it.
#[derive(Clone)]
pub struct Catalog {
    database: Database,
    cache: CacheState,
    services: Services,
}

impl Catalog {
    /// Connect to the database (applying pending migrations) and, when
    /// configured, to Redis.
    pub async fn connect(config: &CatalogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let database = Database::connect(&config.database).await?;
        let cache = CacheState::connect(config.cache.as_ref()).await;

        Ok(Self::new(database, cache))
    }

    pub fn new(database: Database, cache: CacheState) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self {
            database,
            cache,
            services,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn health(&self) -> HealthChecker {
        HealthChecker::new(self.database.clone(), self.cache.clone())
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
