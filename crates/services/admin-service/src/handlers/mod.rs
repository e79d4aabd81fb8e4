//! HTTP handlers.

mod health_handler;
mod resource_handler;
mod table_handler;

pub use health_handler::{health_check, health_routes};
pub use resource_handler::resource_routes;
pub use table_handler::table_routes;
