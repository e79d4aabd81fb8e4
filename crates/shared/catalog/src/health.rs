//! Dependency health reporting shared by the HTTP services.

use serde::{Deserialize, Serialize};

use crate::infra::{CacheState, Database};

const HEALTHY: &str = "healthy";
const UNHEALTHY: &str = "unhealthy";
const DISABLED: &str = "disabled";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub services: ServiceStatus,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}

/// Individual dependency status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub database: ServiceHealth,
    pub cache: ServiceHealth,
}

/// Dependency health with optional error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
            error: None,
        }
    }

    fn disabled() -> Self {
        Self {
            status: DISABLED.to_string(),
            error: None,
        }
    }

    fn unhealthy(error: impl ToString) -> Self {
        Self {
            status: UNHEALTHY.to_string(),
            error: Some(error.to_string()),
        }
    }

    fn is_ok(&self) -> bool {
        self.status != UNHEALTHY
    }
}

/// Pings the database and, when configured, the cache.
#[derive(Clone)]
pub struct HealthChecker {
    database: Database,
    cache: CacheState,
}

impl HealthChecker {
    pub fn new(database: Database, cache: CacheState) -> Self {
        Self { database, cache }
    }

    pub async fn check(&self, service: &str) -> HealthResponse {
        let database = match self.database.ping().await {
            Ok(()) => ServiceHealth::healthy(),
            Err(e) => ServiceHealth::unhealthy(e),
        };

        let cache = match &self.cache {
            CacheState::Disabled => ServiceHealth::disabled(),
            CacheState::Connected(cache) => match cache.ping().await {
                Ok(()) => ServiceHealth::healthy(),
                Err(e) => ServiceHealth::unhealthy(e),
            },
            CacheState::Unreachable(error) => ServiceHealth::unhealthy(error),
        };

        let all_healthy = database.is_ok() && cache.is_ok();
        if !all_healthy {
            tracing::warn!("{} dependencies degraded", service);
        }

        HealthResponse {
            status: if all_healthy { HEALTHY } else { "degraded" }.to_string(),
            service: service.to_string(),
            services: ServiceStatus { database, cache },
        }
    }
}
