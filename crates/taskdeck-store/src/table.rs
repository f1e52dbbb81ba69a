//! Generic keyed table with insertion-ordered listing.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store lock poisoned")]
    Lock,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A thread-safe keyed table for one entity type.
///
/// Entries are keyed by caller-supplied string ids and listed in insertion
/// order. Every read-modify-write sequence runs under a single write lock,
/// so concurrent `update`/`delete` calls on the same id cannot race.
#[derive(Debug)]
pub struct Table<T: Clone> {
    inner: RwLock<Entries<T>>,
}

#[derive(Debug)]
struct Entries<T> {
    rows: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Clone> Table<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Entries {
                rows: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Insert an entity under `id`. Re-inserting an existing id replaces the
    /// entity but keeps its original position.
    pub fn add(&self, id: &str, entity: T) -> StoreResult<()> {
        let mut entries = self.inner.write().map_err(|_| StoreError::Lock)?;
        if entries.rows.insert(id.to_string(), entity).is_none() {
            entries.order.push(id.to_string());
        }
        Ok(())
    }

    /// Get a clone of the entity stored under `id`.
    pub fn get(&self, id: &str) -> StoreResult<T> {
        let entries = self.inner.read().map_err(|_| StoreError::Lock)?;
        entries
            .rows
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// List all entities in insertion order.
    pub fn list(&self) -> StoreResult<Vec<T>> {
        let entries = self.inner.read().map_err(|_| StoreError::Lock)?;
        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.rows.get(id).cloned())
            .collect())
    }

    /// Apply `mutator` to the entity under `id` and return the updated value.
    pub fn update<F>(&self, id: &str, mutator: F) -> StoreResult<T>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.inner.write().map_err(|_| StoreError::Lock)?;
        let entity = entries
            .rows
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        mutator(entity);
        Ok(entity.clone())
    }

    /// Remove the entity under `id`.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut entries = self.inner.write().map_err(|_| StoreError::Lock)?;
        if entries.rows.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        entries.order.retain(|key| key != id);
        Ok(())
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
