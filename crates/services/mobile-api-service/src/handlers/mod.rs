//! HTTP handlers.

mod health_handler;
mod list_handler;

pub use health_handler::{health_check, health_routes};
pub use list_handler::active_list_routes;
