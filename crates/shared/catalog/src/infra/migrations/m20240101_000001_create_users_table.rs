//! Migration: Create users table.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

use domain::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH, STATUS_ACTIVE};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Name)
                            .string_len(MAX_NAME_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(MAX_EMAIL_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Phone)
                            .string_len(MAX_PHONE_LENGTH)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::Status)
                            .string_len(50)
                            .not_null()
                            .default(STATUS_ACTIVE),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_deleted_at")
                    .table(Users::Table)
                    .col(Users::DeletedAt)
                    .to_owned(),
            )
            .await?;

        // A deleted user releases its email, so uniqueness covers live rows only
        let live_email_index = match manager.get_database_backend() {
            DbBackend::MySql => {
                "ALTER TABLE users \
                 ADD COLUMN live_email VARCHAR(255) \
                 GENERATED ALWAYS AS (CASE WHEN deleted_at IS NULL THEN email END) STORED, \
                 ADD UNIQUE INDEX idx_users_live_email (live_email)"
            }
            DbBackend::Postgres | DbBackend::Sqlite => {
                "CREATE UNIQUE INDEX idx_users_live_email ON users (email) WHERE deleted_at IS NULL"
            }
        };
        manager
            .get_connection()
            .execute_unprepared(live_email_index)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Status,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
