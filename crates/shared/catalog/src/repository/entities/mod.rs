//! SeaORM entities for the catalog tables.

pub mod brand;
pub mod store;
pub mod user;

use chrono::{DateTime, Utc};
use sea_orm::EntityTrait;

use domain::Resource;

/// Per-table knowledge the generic repository needs.
///
/// Each table exposes the same bookkeeping columns (`id`, `status`,
/// `updated_at`, `deleted_at`); the entity decides how client payloads map
/// onto its own columns.
pub trait CatalogEntity: EntityTrait {
    /// Domain record produced from a row.
    type Resource: Resource + From<Self::Model>;

    fn id_column() -> Self::Column;

    fn status_column() -> Self::Column;

    fn updated_at_column() -> Self::Column;

    fn deleted_at_column() -> Self::Column;

    /// Column whose value must stay unique among live rows.
    fn unique_column() -> Option<Self::Column> {
        None
    }

    /// Build a fresh row; the id is left for the database to assign.
    fn new_row(input: <Self::Resource as Resource>::Create, now: DateTime<Utc>) -> Self::ActiveModel;

    /// Overwrite the columns the payload actually supplies.
    fn apply_changes(row: &mut Self::ActiveModel, input: <Self::Resource as Resource>::Update);
}
