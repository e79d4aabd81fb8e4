//! Route configuration.

use axum::Router;

use domain::{Brand, Store, User};

use crate::handlers::{active_list_routes, health_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/api/users", active_list_routes::<User>())
        .nest("/api/stores", active_list_routes::<Store>())
        .nest("/api/brands", active_list_routes::<Brand>())
        .with_state(state)
}
