//! Infrastructure layer - database and external services.

mod cache;
mod db;
pub mod migrations;

pub use cache::{Cache, CacheState};
pub use db::Database;
pub use migrations::Migrator;
