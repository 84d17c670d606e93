/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::MakeTaskRequest;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use taskboard_core::consts::{MAX_TASK_DESCRIPTION_LEN, MAX_TASK_SEVERITY_LEN};
use taskboard_core::database::get_project_by_id;
use taskboard_core::input::check_length;
use taskboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct TaskResponse {
    pub id: i32,
    pub description: String,
    pub due_date: NaiveDate,
    pub severity: String,
}

impl From<MTask> for TaskResponse {
    fn from(task: MTask) -> Self {
        TaskResponse {
            id: task.id,
            description: task.description,
            due_date: task.due_date,
            severity: task.severity,
        }
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<i32>,
) -> WebResult<Json<Vec<TaskResponse>>> {
    get_project_by_id(Arc::clone(&state), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let tasks = ETask::find()
        .filter(CTask::ProjectId.eq(project_id))
        .order_by_asc(CTask::Id)
        .all(&state.db)
        .await?;

    let tasks: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();

    Ok(Json(tasks))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<i32>,
    body: Result<Json<MakeTaskRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<i32>)> {
    let Json(body) = body?;

    check_length("description", &body.description, MAX_TASK_DESCRIPTION_LEN)
        .map_err(WebError::BadRequest)?;
    check_length("severity", &body.severity, MAX_TASK_SEVERITY_LEN)
        .map_err(WebError::BadRequest)?;

    get_project_by_id(Arc::clone(&state), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let task = ATask {
        description: Set(body.description.clone()),
        due_date: Set(body.due_date),
        severity: Set(body.severity.clone()),
        project_id: Set(project_id),
        ..Default::default()
    };

    let task = task.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(task.id)))
}
