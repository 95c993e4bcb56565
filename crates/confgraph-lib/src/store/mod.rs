//! Graph store seams and backends
//!
//! The resolver only sees [`GraphSource`], the two read primitives it needs.
//! The management surface sees the full [`Store`] CRUD contract. Both are
//! trait seams so a different backend (an actual database, say) can slot in
//! without touching the resolution code.

pub mod loader;
pub mod memory;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use loader::{GraphDefinition, LoadError};
pub use memory::MemoryStore;

use crate::primitives::{Item, ItemModule, Module, ModuleDependency};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors surfaced by a graph store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to answer. Fatal to the in-flight request;
    /// callers do not retry.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// A write violated a uniqueness constraint.
    #[error("duplicate module dependency: {dependent} -> {dependee}")]
    Conflict { dependent: i64, dependee: i64 },
}

/// Read primitives consumed by the closure resolver.
///
/// Both methods answer with empty collections for unknown modules or
/// modules without edges or items. An error means the backend itself
/// failed, never "no data".
pub trait GraphSource: Send + Sync {
    /// Direct outgoing dependency edges of a module.
    fn dependees_of(&self, module: i64) -> Result<BTreeSet<i64>, StoreError>;

    /// Items associated with a module. Association rows whose item no
    /// longer resolves are skipped, not errors.
    fn items_of(&self, module: i64) -> Result<Vec<Item>, StoreError>;
}

/// Full management contract: the CRUD surface of the configuration store.
///
/// Point lookups answer `Ok(None)` for missing rows. Deletes report the
/// affected-row count, zero when nothing matched. Inserted rows get a
/// generated identity; nothing is ever mutated in place.
pub trait Store: GraphSource {
    fn item(&self, id: i64) -> Result<Option<Item>, StoreError>;
    fn items(&self) -> Result<Vec<Item>, StoreError>;
    fn create_item(&self, value: &str, item_type: &str, version: &str)
    -> Result<i64, StoreError>;
    fn delete_item(&self, id: i64) -> Result<u64, StoreError>;

    fn module(&self, id: i64) -> Result<Option<Module>, StoreError>;
    fn modules(&self) -> Result<Vec<Module>, StoreError>;
    fn create_module(&self, value: &str, version: &str) -> Result<i64, StoreError>;
    fn delete_module(&self, id: i64) -> Result<u64, StoreError>;

    fn item_module(&self, id: i64) -> Result<Option<ItemModule>, StoreError>;
    fn item_modules(&self) -> Result<Vec<ItemModule>, StoreError>;
    fn create_item_module(&self, item_id: i64, module_id: i64) -> Result<i64, StoreError>;
    fn delete_item_module(&self, id: i64) -> Result<u64, StoreError>;

    fn module_dependencies(&self) -> Result<Vec<ModuleDependency>, StoreError>;
    fn dependencies_of_dependent(&self, dependent: i64)
    -> Result<Vec<ModuleDependency>, StoreError>;
    fn dependencies_of_dependee(&self, dependee: i64)
    -> Result<Vec<ModuleDependency>, StoreError>;
    fn create_module_dependency(&self, dependent: i64, dependee: i64) -> Result<(), StoreError>;
    fn delete_module_dependency(&self, dependent: i64, dependee: i64) -> Result<u64, StoreError>;
    fn delete_dependencies_by_dependent(&self, dependent: i64) -> Result<u64, StoreError>;
    fn delete_dependencies_by_dependee(&self, dependee: i64) -> Result<u64, StoreError>;
}
