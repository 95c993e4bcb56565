//! Graph definition files
//!
//! A TOML definition describes the full entity state of a store: items,
//! modules, item-module associations, and the dependency edges. Loading
//! replays the definition into a [`MemoryStore`].
//!
//! ```toml
//! [[items]]
//! id = 1
//! value = "db.conf"
//! type = "ini"
//! version = "1.0"
//!
//! [[modules]]
//! id = 1
//! value = "core"
//! version = "1.0"
//!
//! [[associations]]
//! item = 1
//! module = 1
//!
//! [[dependencies]]
//! dependent = 2
//! dependee = 1
//! ```

use super::{MemoryStore, Store, StoreError};
use crate::primitives::{Item, Module};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or replaying a graph definition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read graph definition {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse graph definition {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("duplicate item id {id} in graph definition")]
    DuplicateItem { id: i64 },

    #[error("duplicate module id {id} in graph definition")]
    DuplicateModule { id: i64 },

    #[error("duplicate dependency {dependent} -> {dependee} in graph definition")]
    DuplicateDependency { dependent: i64, dependee: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: i64,
    pub value: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDef {
    pub id: i64,
    pub value: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AssociationDef {
    pub item: i64,
    pub module: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DependencyDef {
    pub dependent: i64,
    pub dependee: i64,
}

/// Parsed graph definition file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub modules: Vec<ModuleDef>,
    #[serde(default)]
    pub associations: Vec<AssociationDef>,
    #[serde(default)]
    pub dependencies: Vec<DependencyDef>,
}

impl GraphDefinition {
    pub fn from_str(content: &str, origin: &Path) -> Result<Self, LoadError> {
        toml::from_str(content).map_err(|source| LoadError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content, path)
    }

    /// Replay the definition into a fresh in-memory store.
    pub fn into_store(self) -> Result<MemoryStore, LoadError> {
        let store = MemoryStore::new();

        for def in self.items {
            let inserted = store.insert_item(Item {
                id: def.id,
                value: def.value,
                item_type: def.item_type,
                version: def.version,
            })?;
            if !inserted {
                return Err(LoadError::DuplicateItem { id: def.id });
            }
        }

        for def in self.modules {
            let inserted = store.insert_module(Module {
                id: def.id,
                value: def.value,
                version: def.version,
            })?;
            if !inserted {
                return Err(LoadError::DuplicateModule { id: def.id });
            }
        }

        // Dangling associations are legal here; the store skips them at
        // query time.
        for def in self.associations {
            store.create_item_module(def.item, def.module)?;
        }

        for def in self.dependencies {
            match store.create_module_dependency(def.dependent, def.dependee) {
                Ok(()) => {}
                Err(StoreError::Conflict {
                    dependent,
                    dependee,
                }) => {
                    return Err(LoadError::DuplicateDependency {
                        dependent,
                        dependee,
                    });
                }
                Err(other) => return Err(other.into()),
            }
        }

        debug!("graph definition loaded");
        Ok(store)
    }
}

/// Read a definition file and build the store it describes.
pub fn load_store(path: &Path) -> Result<MemoryStore, LoadError> {
    GraphDefinition::from_path(path)?.into_store()
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
