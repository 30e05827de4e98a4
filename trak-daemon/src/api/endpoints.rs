use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use trak_types::{CreateTask, Task, TaskId, UpdateTask};

use super::errors::{ApiError, ApiResult};
use crate::store::TaskStore;

#[tracing::instrument(skip(store), err(Debug))]
pub async fn create_task_endpoint(
    State(store): State<Arc<TaskStore>>,
    Json(payload): Json<CreateTask>,
) -> ApiResult<Task> {
    let task = store.create(payload);
    Ok((StatusCode::CREATED, Json(task)))
}

#[tracing::instrument(skip(store), err(Debug))]
pub async fn list_tasks_endpoint(State(store): State<Arc<TaskStore>>) -> ApiResult<Vec<Task>> {
    Ok((StatusCode::OK, Json(store.list())))
}

#[tracing::instrument(skip(store), err(Debug))]
pub async fn find_task_endpoint(
    State(store): State<Arc<TaskStore>>,
    Path(id): Path<TaskId>,
) -> ApiResult<Task> {
    let task = store.get(id)?;
    Ok((StatusCode::OK, Json(task)))
}

#[tracing::instrument(skip(store), err(Debug))]
pub async fn update_task_endpoint(
    State(store): State<Arc<TaskStore>>,
    Path(id): Path<TaskId>,
    Json(payload): Json<UpdateTask>,
) -> ApiResult<Task> {
    let task = store.update(id, payload)?;
    Ok((StatusCode::OK, Json(task)))
}

#[tracing::instrument(skip(store), err(Debug))]
pub async fn delete_task_endpoint(
    State(store): State<Arc<TaskStore>>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
