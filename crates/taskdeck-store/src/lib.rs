//! Taskdeck Storage Layer — in-memory keyed tables.
//!
//! Provides the thread-safe, insertion-ordered [`Table`] primitive the
//! service layer keeps its entities in. One table per entity type.

pub mod table;

pub use table::{StoreError, StoreResult, Table};
