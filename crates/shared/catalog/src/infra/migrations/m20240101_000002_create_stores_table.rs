//! Migration: Create stores table.

use sea_orm_migration::prelude::*;

use domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH, STATUS_ACTIVE};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Stores::Name)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Stores::Address).text().not_null())
                    .col(
                        ColumnDef::new(Stores::Phone)
                            .string_len(MAX_PHONE_LENGTH)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Stores::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Stores::Status)
                            .string_len(50)
                            .not_null()
                            .default(STATUS_ACTIVE),
                    )
                    .col(
                        ColumnDef::new(Stores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stores::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stores_deleted_at")
                    .table(Stores::Table)
                    .col(Stores::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
    Name,
    Address,
    Phone,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
