//! Common utilities shared across the catalog services.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Pagination policy and response envelopes
//! - Configuration structures

pub mod config;
pub mod error;
pub mod pagination;
pub mod response;

pub use config::{CacheConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, AppResult, OptionExt};
pub use pagination::{Page, PageRequest, Paginated, PaginationMeta, PaginationQuery, MAX_OFFSET, MAX_PAGE_SIZE};
pub use response::{ApiResponse, Created, ListResponse};
