//! Task route handlers.
//!
//! `task_type` and `status` travel as plain strings and are parsed by the
//! service layer, so unrecognized values surface as validation errors rather
//! than framework rejections.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use taskdeck_core::task::{self, model::Task};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub task_type: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = task::create_task(
        &state.store,
        &project_id,
        &req.title,
        &req.task_type,
        req.due_date,
    )?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = task::list_tasks(&state.store, &project_id)?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = task::get_task(&state.store, &task_id)?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = task::update_task(
        &state.store,
        &task_id,
        req.title.as_deref(),
        req.due_date,
        req.status.as_deref(),
    )?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    task::delete_task(&state.store, &task_id)?;
    Ok(StatusCode::NO_CONTENT)
}
