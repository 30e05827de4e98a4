mod endpoints;
mod errors;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{api::endpoints::*, store::TaskStore};

pub fn router(store: Arc<TaskStore>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::WARN));

    Router::new()
        .route("/api/tasks", post(create_task_endpoint))
        .route("/api/tasks", get(list_tasks_endpoint))
        .route("/api/tasks/:id", get(find_task_endpoint))
        .route("/api/tasks/:id", patch(update_task_endpoint))
        .route("/api/tasks/:id", delete(delete_task_endpoint))
        .layer(trace_layer)
        .with_state(store)
}

#[tracing::instrument(skip_all)]
pub async fn run(addr: SocketAddr, store: Arc<TaskStore>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind address")?;
    tracing::info!("Listening at http://{addr}");

    axum::serve(listener, router(store))
        .await
        .context("Failed to serve HTTP")
}
