//! Admin service configuration.

use catalog::config::CatalogConfig;
use common::ServerConfig;

/// Default admin listener port
pub const DEFAULT_PORT: u16 = 8080;

/// Admin service configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env("ADMIN_SERVER", DEFAULT_PORT),
            catalog: CatalogConfig::from_env(),
        }
    }
}

impl Default for AdminConfig {
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
