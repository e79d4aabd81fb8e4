//! Catalog backend configuration.

use common::{CacheConfig, DatabaseConfig};

/// Connection settings for the catalog backend.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
    /// `None` disables the cache
    pub cache: Option<CacheConfig>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            cache: None,
        }
    }
}
