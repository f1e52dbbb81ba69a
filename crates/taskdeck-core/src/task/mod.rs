//! Task management.

pub mod model;

use chrono::NaiveDate;
use taskdeck_store::StoreError;
use uuid::Uuid;

use crate::error::{TaskdeckError, TaskdeckResult};
use crate::project;
use crate::store::Store;
use model::{Task, TaskStatus, TaskType};

/// Create a new task in an existing project.
///
/// The project is resolved before any field validation, so an unknown
/// project id always surfaces as `ProjectNotFound`. New tasks start `Open`.
pub fn create_task(
    store: &Store,
    project_id: &str,
    title: &str,
    task_type: &str,
    due_date: Option<NaiveDate>,
) -> TaskdeckResult<Task> {
    project::get_project(store, project_id)?;

    if title.trim().is_empty() {
        return Err(TaskdeckError::validation("Task title must not be empty"));
    }
    let task_type = TaskType::parse(task_type).ok_or_else(|| {
        TaskdeckError::validation(format!("Unrecognized task type '{}'", task_type))
    })?;

    let now = chrono::Utc::now().to_rfc3339();
    let task = Task {
        id: Uuid::new_v4().to_string(),
        project_id: project_id.to_string(),
        title: title.to_string(),
        task_type,
        due_date,
        status: TaskStatus::Open,
        created_at: now.clone(),
        updated_at: now,
    };
    store.tasks.add(&task.id, task.clone())?;

    tracing::debug!(task_id = %task.id, project_id, "created task");
    Ok(task)
}

/// Get a task by ID.
pub fn get_task(store: &Store, task_id: &str) -> TaskdeckResult<Task> {
    store.tasks.get(task_id).map_err(|e| match e {
        StoreError::NotFound(_) => TaskdeckError::TaskNotFound(task_id.to_string()),
        e => TaskdeckError::Store(e),
    })
}

/// List all tasks for a project, in creation order.
pub fn list_tasks(store: &Store, project_id: &str) -> TaskdeckResult<Vec<Task>> {
    project::get_project(store, project_id)?;

    let tasks = store.tasks.list()?;
    Ok(tasks
        .into_iter()
        .filter(|t| t.project_id == project_id)
        .collect())
}

/// Apply a partial update to a task. Fields left as `None` are unchanged.
///
/// Every provided field is validated before anything is mutated: a blank
/// title and an unrecognized status string are validation errors, and a
/// status change must be a legal transition from the task's current status.
pub fn update_task(
    store: &Store,
    task_id: &str,
    title: Option<&str>,
    due_date: Option<NaiveDate>,
    status: Option<&str>,
) -> TaskdeckResult<Task> {
    let task = get_task(store, task_id)?;

    if let Some(title) = title {
        if title.trim().is_empty() {
            return Err(TaskdeckError::validation("Task title must not be empty"));
        }
    }
    let status = status
        .map(|s| {
            TaskStatus::parse(s)
                .ok_or_else(|| TaskdeckError::validation(format!("Unrecognized status '{}'", s)))
        })
        .transpose()?;
    if let Some(to) = status {
        if !task.status.can_transition_to(&to) {
            return Err(TaskdeckError::InvalidStatusTransition {
                from: task.status,
                to,
            });
        }
    }

    let updated = store.tasks.update(task_id, |task| {
        if let Some(title) = title {
            task.title = title.to_string();
        }
        if let Some(due_date) = due_date {
            task.due_date = Some(due_date);
        }
        if let Some(status) = status {
            task.status = status;
        }
        task.updated_at = chrono::Utc::now().to_rfc3339();
    })?;

    tracing::debug!(task_id, "updated task");
    Ok(updated)
}

/// Delete a task permanently.
pub fn delete_task(store: &Store, task_id: &str) -> TaskdeckResult<()> {
    store.tasks.delete(task_id).map_err(|e| match e {
        StoreError::NotFound(_) => TaskdeckError::TaskNotFound(task_id.to_string()),
        e => TaskdeckError::Store(e),
    })?;

    tracing::debug!(task_id, "deleted task");
    Ok(())
}
