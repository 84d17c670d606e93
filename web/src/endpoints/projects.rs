/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::MakeProjectRequest;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use taskboard_core::consts::MAX_PROJECT_NAME_LEN;
use taskboard_core::input::check_length;
use taskboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use std::sync::Arc;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<ListResponse>> {
    let projects = EProject::find()
        .order_by_asc(CProject::Id)
        .all(&state.db)
        .await?;

    let projects: ListResponse = projects
        .iter()
        .map(|p| ListItem {
            id: p.id,
            name: p.name.clone(),
        })
        .collect();

    Ok(Json(projects))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeProjectRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<i32>)> {
    let Json(body) = body?;

    check_length("name", &body.name, MAX_PROJECT_NAME_LEN).map_err(WebError::BadRequest)?;

    let project = AProject {
        name: Set(body.name.clone()),
        ..Default::default()
    };

    let project = project.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(project.id)))
}
