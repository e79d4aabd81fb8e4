//! Admin Service Library
//!
//! HTTP API with full CRUD over users, stores and brands, plus the table
//! declarations an admin panel renders. It can be run as a standalone
//! service or embedded in the combined binary.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod tables;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use catalog::Catalog;

use crate::config::AdminConfig;
use crate::routes::create_router;
use crate::state::AppState;

pub use catalog::{run_migrations, MigrateAction};

/// Run the admin service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AdminConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;

    run_server_with_config(config).await
}

/// Connect the catalog and run the HTTP server.
pub async fn run_server_with_config(config: AdminConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::connect(&config.catalog).await?;
    serve(&catalog, &config.server.host, config.server.port).await
}

/// Build the admin application on top of a connected catalog.
pub fn create_app(catalog: &Catalog) -> Router {
    create_router(AppState::new(catalog)).layer(TraceLayer::new_for_http())
}

/// Serve the admin application until the listener fails.
pub async fn serve(
    catalog: &Catalog,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(catalog);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Admin service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
