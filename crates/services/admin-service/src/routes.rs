//! Route configuration.

use axum::Router;

use domain::{Brand, Store, User};

use crate::handlers::{health_routes, resource_routes, table_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        // Full CRUD over live records, any status
        .nest("/users", resource_routes::<User>())
        .nest("/stores", resource_routes::<Store>())
        .nest("/brands", resource_routes::<Brand>())
        // Declarations for the admin panel renderer
        .nest("/admin/tables", table_routes())
        .with_state(state)
}
