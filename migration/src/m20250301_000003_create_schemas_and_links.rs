// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_users_and_teams::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create schemas table
        manager
            .create_table(
                Table::create()
                    .table(Schemas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schemas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schemas::Name).string().not_null())
                    .col(ColumnDef::new(Schemas::TeamId).integer().not_null())
                    .col(
                        ColumnDef::new(Schemas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schemas_team")
                            .from(Schemas::Table, Schemas::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create shareable_links table
        manager
            .create_table(
                Table::create()
                    .table(ShareableLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShareableLinks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ShareableLinks::Key)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ShareableLinks::SchemaId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ShareableLinks::EnableSharing)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ShareableLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ShareableLinks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shareable_links_schema")
                            .from(ShareableLinks::Table, ShareableLinks::SchemaId)
                            .to(Schemas::Table, Schemas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShareableLinks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Schemas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Schemas {
    Table,
    Id,
    Name,
    TeamId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ShareableLinks {
    Table,
    Id,
    Key,
    SchemaId,
    EnableSharing,
    CreatedAt,
    UpdatedAt,
}
