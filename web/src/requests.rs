/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeProjectRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeTaskRequest {
    pub description: String,
    pub due_date: NaiveDate,
    pub severity: String,
}
