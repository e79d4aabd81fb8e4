//! Mobile API service configuration.

use catalog::config::CatalogConfig;
use common::ServerConfig;

/// Default mobile API listener port
pub const DEFAULT_PORT: u16 = 8081;

/// Mobile API service configuration.
#[derive(Debug, Clone)]
pub struct MobileApiConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

impl MobileApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env("API_SERVER", DEFAULT_PORT),
            catalog: CatalogConfig::from_env(),
        }
    }
}

impl Default for MobileApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            catalog: CatalogConfig::default(),
        }
    }
}
