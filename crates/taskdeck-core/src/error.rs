//! Centralized error types for taskdeck.

use thiserror::Error;

use crate::task::model::TaskStatus;

/// Main error type for taskdeck operations.
#[derive(Error, Debug)]
pub enum TaskdeckError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid status transition: cannot move from '{from}' to '{to}'")]
    InvalidStatusTransition { from: TaskStatus, to: TaskStatus },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    Store(#[from] taskdeck_store::StoreError),
}

/// Result type for taskdeck operations.
pub type TaskdeckResult<T> = Result<T, TaskdeckError>;

impl TaskdeckError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
