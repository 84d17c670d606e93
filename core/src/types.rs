/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::DEFAULT_DATABASE_URL;
use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Taskboard", display_name = "Taskboard", bin_name = "taskboard-server", author = "Taskboard Contributors", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TASKBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TASKBOARD_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TASKBOARD_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "TASKBOARD_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
    #[arg(long, env = "TASKBOARD_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: i32,
    pub name: String,
}

pub type ListResponse = Vec<ListItem>;

pub type EProject = project::Entity;
pub type ETask = task::Entity;

pub type MProject = project::Model;
pub type MTask = task::Model;

pub type AProject = project::ActiveModel;
pub type ATask = task::ActiveModel;

pub type CProject = project::Column;
pub type CTask = task::Column;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_target_local_sqlite_file() {
        let cli = Cli::try_parse_from(["taskboard-server"]).unwrap();

        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.ip, "127.0.0.1");
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.database_url, DEFAULT_DATABASE_URL);
        assert!(cli.database_url_file.is_none());
    }
}
