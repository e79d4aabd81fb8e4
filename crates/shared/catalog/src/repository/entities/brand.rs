//! Brand database entity for SeaORM.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{provided, Brand, CreateBrand, Status, UpdateBrand};

use super::CatalogEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Logo image URL
    pub logo: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Brand {
    fn from(model: Model) -> Self {
        Brand {
            id: model.id,
            name: model.name,
            description: model.description,
            logo: model.logo,
            status: Status::from(model.status.as_str()),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl CatalogEntity for Entity {
    type Resource = Brand;

    fn id_column() -> Column {
        Column::Id
    }

    fn status_column() -> Column {
        Column::Status
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }

    fn new_row(input: CreateBrand, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            logo: Set(input.logo),
            status: Set(Status::Active.into()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
    }

    fn apply_changes(row: &mut ActiveModel, input: UpdateBrand) {
        if let Some(name) = provided(input.name) {
            row.name = Set(name);
        }
        if let Some(description) = provided(input.description) {
            row.description = Set(description);
        }
        if let Some(logo) = provided(input.logo) {
            row.logo = Set(logo);
        }
        if let Some(status) = provided(input.status) {
            row.status = Set(status);
        }
    }
}
