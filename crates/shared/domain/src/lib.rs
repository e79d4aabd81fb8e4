//! Domain layer - Catalog records and their input payloads.
//!
//! This crate holds the pure shape of users, stores and brands: the records
//! returned by the API, the create/update payloads accepted from clients, and
//! the field rules those payloads must satisfy. It has no infrastructure
//! dependencies; persistence and HTTP crates build on top of it.

pub mod brand;
pub mod constants;
pub mod error;
pub mod resource;
pub mod status;
pub mod store;
pub mod user;
pub mod validation;

pub use brand::{Brand, CreateBrand, UpdateBrand};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use resource::{provided, Resource};
pub use status::Status;
pub use store::{CreateStore, Store, UpdateStore};
pub use user::{CreateUser, UpdateUser, User};
