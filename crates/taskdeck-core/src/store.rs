//! Process-wide entity store.

use taskdeck_store::Table;

use crate::project::model::Project;
use crate::task::model::Task;

/// Keyed tables for every entity type.
///
/// One instance per process (or per test), passed to the service functions
/// by reference. There is no ambient global state.
#[derive(Debug, Default)]
pub struct Store {
    pub projects: Table<Project>,
    pub tasks: Table<Task>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
