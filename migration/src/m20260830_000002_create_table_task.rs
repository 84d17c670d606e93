/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Task::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Task::Description)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Task::DueDate).date().not_null())
                    .col(ColumnDef::new(Task::Severity).string_len(10).not_null())
                    .col(ColumnDef::new(Task::ProjectId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-task-project_id")
                            .from(Task::Table, Task::ProjectId)
                            .to(Project::Table, Project::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Task {
    Table,
    Id,
    Description,
    DueDate,
    Severity,
    ProjectId,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
