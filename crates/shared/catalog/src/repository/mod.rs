//! Repository layer for data access.

pub mod entities;
mod crud_repository;

pub use crud_repository::{CrudRepository, SeaRepository};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use crud_repository::MockCrudRepository;

/// Repository over the `users` table
pub type UserStore = SeaRepository<entities::user::Entity>;

/// Repository over the `stores` table
pub type StoreStore = SeaRepository<entities::store::Entity>;

/// Repository over the `brands` table
pub type BrandStore = SeaRepository<entities::brand::Entity>;
