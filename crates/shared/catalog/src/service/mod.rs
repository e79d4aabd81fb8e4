//! Service layer - business logic on top of the repositories.

mod catalog_service;
mod container;

pub use catalog_service::{CatalogManager, CatalogService};
pub use container::{ServiceContainer, Services};
