//! Migration: Create brands table.

use sea_orm_migration::prelude::*;

use domain::{MAX_LOGO_LENGTH, MAX_NAME_LENGTH, STATUS_ACTIVE};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Brands::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Brands::Name)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Brands::Description).text().not_null())
                    .col(
                        ColumnDef::new(Brands::Logo)
                            .string_len(MAX_LOGO_LENGTH)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Brands::Status)
                            .string_len(50)
                            .not_null()
                            .default(STATUS_ACTIVE),
                    )
                    .col(
                        ColumnDef::new(Brands::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Brands::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Brands::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_brands_deleted_at")
                    .table(Brands::Table)
                    .col(Brands::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Brands::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Brands {
    Table,
    Id,
    Name,
    Description,
    Logo,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
