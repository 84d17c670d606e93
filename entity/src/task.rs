/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub due_date: NaiveDate,
    pub severity: String,
    pub project_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_round_trips_as_iso_date() {
        let task = Model {
            id: 1,
            description: "Draft release notes".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            severity: "high".to_string(),
            project_id: 1,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["due_date"], "2024-03-15");

        let back: Model = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
