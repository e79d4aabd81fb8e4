//! Store database entity for SeaORM.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{provided, CreateStore, Status, Store, UpdateStore};

use super::CatalogEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(model: Model) -> Self {
        Store {
            id: model.id,
            name: model.name,
            address: model.address,
            phone: model.phone,
            email: model.email,
            status: Status::from(model.status.as_str()),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl CatalogEntity for Entity {
    type Resource = Store;

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

    fn new_row(input: CreateStore, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            phone: Set(input.phone),
            email: Set(input.email),
            status: Set(Status::Active.into()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
    }

    fn apply_changes(row: &mut ActiveModel, input: UpdateStore) {
        if let Some(name) = provided(input.name) {
            row.name = Set(name);
        }
        if let Some(address) = provided(input.address) {
            row.address = Set(address);
        }
        if let Some(phone) = provided(input.phone) {
            row.phone = Set(phone);
        }
        if let Some(email) = provided(input.email) {
            row.email = Set(email);
        }
        if let Some(status) = provided(input.status) {
            row.status = Set(status);
        }
    }
}
