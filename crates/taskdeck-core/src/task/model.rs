//! Task domain models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub task_type: TaskType,
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
    Cancelled,
}

impl TaskStatus {
    /// Parse from a wire string. Unrecognized values are rejected, never
    /// coerced to a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Convert to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Check if transition to another status is valid.
    ///
    /// Only forward edges are legal. Same-state moves and moves out of the
    /// terminal states (`Done`, `Cancelled`) are not.
    pub fn can_transition_to(&self, to: &Self) -> bool {
        matches!(
            (self, to),
            (Self::Open, Self::InProgress)
                | (Self::Open, Self::Cancelled)
                | (Self::InProgress, Self::Done)
                | (Self::InProgress, Self::Cancelled)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized task kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Feature,
    Bug,
    Chore,
    Doc,
}

impl TaskType {
    /// Parse from a wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "feature" => Some(Self::Feature),
            "bug" => Some(Self::Bug),
            "chore" => Some(Self::Chore),
            "doc" => Some(Self::Doc),
            _ => None,
        }
    }

    /// Convert to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Chore => "chore",
            Self::Doc => "doc",
        }
    }
}
