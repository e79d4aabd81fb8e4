//! Shared configuration structures, built from environment variables.

use std::env;

/// Read an environment variable, treating unset and empty the same.
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read and parse an environment variable, falling back on any failure.
pub fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load from `<PREFIX>_HOST` / `<PREFIX>_PORT`.
    pub fn from_env(prefix: &str, default_port: u16) -> Self {
        Self {
            host: env_or(&format!("{}_HOST", prefix), "0.0.0.0"),
            port: env_parse_or(&format!("{}_PORT", prefix), default_port),
        }
    }

    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational database configuration.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mysql://root@localhost:3306/catalog".to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl DatabaseConfig {
    /// `DATABASE_URL` wins; otherwise a MySQL URL is composed from the
    /// `DB_*` variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                mysql_url(
                    &env_or("DB_USER", "root"),
                    &env_or("DB_PASSWORD", ""),
                    &env_or("DB_HOST", "localhost"),
                    &env_or("DB_PORT", "3306"),
                    &env_or("DB_NAME", "catalog"),
                )
            });

        let defaults = Self::default();
        Self {
            url,
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", defaults.min_connections),
        }
    }
}

fn mysql_url(user: &str, password: &str, host: &str, port: &str, name: &str) -> String {
    if password.is_empty() {
        format!("mysql://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, name)
    }
}

/// Redis cache configuration. Only used for connectivity checks.
#[derive(Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub url: String,
}

impl std::fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheConfig")
            .field("url", &"[REDACTED]")
            .finish()
    }
}

impl CacheConfig {
    /// Returns `None` when neither `REDIS_URL` nor `REDIS_HOST` is set.
    pub fn from_env() -> Option<Self> {
        if let Some(url) = env::var("REDIS_URL").ok().filter(|v| !v.is_empty()) {
            return Some(Self { url });
        }

        let host = env::var("REDIS_HOST").ok().filter(|v| !v.is_empty())?;
        Some(Self {
            url: redis_url(
                &host,
                &env_or("REDIS_PORT", "6379"),
                &env_or("REDIS_PASSWORD", ""),
                &env_or("REDIS_DB", "0"),
            ),
        })
    }
}

fn redis_url(host: &str, port: &str, password: &str, db: &str) -> String {
    if password.is_empty() {
        format!("redis://{}:{}/{}", host, port, db)
    } else {
        format!("redis://:{}@{}:{}/{}", password, host, port, db)
    }
}
