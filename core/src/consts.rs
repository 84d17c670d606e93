/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

// Schema is created on first connect; mode=rwc creates the file if absent.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://taskboard.db?mode=rwc";

pub const MAX_PROJECT_NAME_LEN: usize = 80;
pub const MAX_TASK_DESCRIPTION_LEN: usize = 120;
pub const MAX_TASK_SEVERITY_LEN: usize = 10;
