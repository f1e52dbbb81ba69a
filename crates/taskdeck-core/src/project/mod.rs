//! Project management.

pub mod model;

use taskdeck_store::StoreError;
use uuid::Uuid;

use crate::error::{TaskdeckError, TaskdeckResult};
use crate::store::Store;
use model::Project;

/// Create a new project.
///
/// The name must be non-empty after trimming; it is stored verbatim.
pub fn create_project(store: &Store, name: &str) -> TaskdeckResult<Project> {
    if name.trim().is_empty() {
        return Err(TaskdeckError::validation("Project name must not be empty"));
    }

    let project = Project {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    store.projects.add(&project.id, project.clone())?;

    tracing::debug!(project_id = %project.id, "created project");
    Ok(project)
}

/// Get a project by ID.
pub fn get_project(store: &Store, id: &str) -> TaskdeckResult<Project> {
    store.projects.get(id).map_err(|e| match e {
        StoreError::NotFound(_) => TaskdeckError::ProjectNotFound(id.to_string()),
        e => TaskdeckError::Store(e),
    })
}

/// List all projects, in creation order.
pub fn list_projects(store: &Store) -> TaskdeckResult<Vec<Project>> {
    Ok(store.projects.list()?)
}
