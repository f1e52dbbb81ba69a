//! Project domain models.

use serde::{Deserialize, Serialize};

/// A container entity that tasks belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: String,
}
