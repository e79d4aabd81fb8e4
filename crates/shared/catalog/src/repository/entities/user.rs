//! User database entity for SeaORM.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{provided, CreateUser, Status, UpdateUser, User};

use super::CatalogEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Soft delete timestamp (NULL = live, set = deleted)
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            status: Status::from(model.status.as_str()),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl CatalogEntity for Entity {
    type Resource = User;

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

    fn unique_column() -> Option<Column> {
        Some(Column::Email)
    }

    fn new_row(input: CreateUser, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            status: Set(Status::Active.into()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
    }

    fn apply_changes(row: &mut ActiveModel, input: UpdateUser) {
        if let Some(name) = provided(input.name) {
            row.name = Set(name);
        }
        if let Some(email) = provided(input.email) {
            row.email = Set(email);
        }
        if let Some(phone) = provided(input.phone) {
            row.phone = Set(phone);
        }
        if let Some(status) = provided(input.status) {
            row.status = Set(status);
        }
    }
}
