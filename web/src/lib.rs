/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;
pub mod requests;


use axum::Router;
use axum::routing::get;
use taskboard_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}

pub fn build_router(state: Arc<ServerState>) -> Router {
    // Cross-origin requests are permitted from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/projects",
            get(endpoints::projects::get).post(endpoints::projects::post),
        )
        .route(
            "/projects/{project_id}/tasks",
            get(endpoints::tasks::get).post(endpoints::tasks::post),
        )
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
