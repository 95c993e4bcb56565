//! In-memory graph store backend
//!
//! Entity tables live in ordered maps; the module dependency graph lives in
//! a petgraph `DiGraph` with an id-to-node map for fast lookup. Everything
//! sits behind a single `RwLock` so concurrent resolution requests can read
//! the store in parallel. Graph nodes are never removed once created, which
//! keeps `NodeIndex` values stable across deletes.

use super::{GraphSource, Store, StoreError};
use crate::primitives::{Item, ItemModule, Module, ModuleDependency};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

#[derive(Debug, Default)]
struct Tables {
    items: BTreeMap<i64, Item>,
    modules: BTreeMap<i64, Module>,
    item_modules: BTreeMap<i64, ItemModule>,
    /// Directed graph: node weights are module ids, edges point from
    /// dependent to dependee.
    graph: DiGraph<i64, ()>,
    node_map: HashMap<i64, NodeIndex>,
    next_item_id: i64,
    next_module_id: i64,
    next_item_module_id: i64,
}

impl Tables {
    /// Node for a module id, created on demand. Edges may reference module
    /// ids with no backing row; the resolver tolerates those.
    fn node_for(&mut self, module: i64) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&module) {
            return idx;
        }
        let idx = self.graph.add_node(module);
        self.node_map.insert(module, idx);
        idx
    }

    fn dependency_at(&self, edge: petgraph::graph::EdgeIndex) -> Option<ModuleDependency> {
        let (a, b) = self.graph.edge_endpoints(edge)?;
        Some(ModuleDependency {
            dependent: self.graph[a],
            dependee: self.graph[b],
        })
    }
}

/// In-memory [`Store`] backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner.read().map_err(|e| StoreError::Unavailable {
            reason: format!("store lock poisoned: {e}"),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner.write().map_err(|e| StoreError::Unavailable {
            reason: format!("store lock poisoned: {e}"),
        })
    }

    /// Insert a fully-formed item row, used by the definition loader.
    /// Answers false when the id is already taken.
    pub(crate) fn insert_item(&self, item: Item) -> Result<bool, StoreError> {
        let mut t = self.write()?;
        if t.items.contains_key(&item.id) {
            return Ok(false);
        }
        t.next_item_id = t.next_item_id.max(item.id.saturating_add(1));
        t.items.insert(item.id, item);
        Ok(true)
    }

    /// Insert a fully-formed module row, used by the definition loader.
    pub(crate) fn insert_module(&self, module: Module) -> Result<bool, StoreError> {
        let mut t = self.write()?;
        if t.modules.contains_key(&module.id) {
            return Ok(false);
        }
        t.next_module_id = t.next_module_id.max(module.id.saturating_add(1));
        t.node_for(module.id);
        t.modules.insert(module.id, module);
        Ok(true)
    }
}

impl GraphSource for MemoryStore {
    fn dependees_of(&self, module: i64) -> Result<BTreeSet<i64>, StoreError> {
        let t = self.read()?;
        let Some(&idx) = t.node_map.get(&module) else {
            return Ok(BTreeSet::new());
        };
        Ok(t.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| t.graph[n])
            .collect())
    }

    fn items_of(&self, module: i64) -> Result<Vec<Item>, StoreError> {
        let t = self.read()?;
        // Dedup association rows by item id; dangling rows are skipped.
        let mut found: BTreeMap<i64, Item> = BTreeMap::new();
        for im in t.item_modules.values() {
            if im.module_id != module {
                continue;
            }
            if let Some(item) = t.items.get(&im.item_id) {
                found.insert(item.id, item.clone());
            } else {
                trace!(item_id = im.item_id, module, "skipping dangling association");
            }
        }
        Ok(found.into_values().collect())
    }
}

impl Store for MemoryStore {
    fn item(&self, id: i64) -> Result<Option<Item>, StoreError> {
        Ok(self.read()?.items.get(&id).cloned())
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.read()?.items.values().cloned().collect())
    }

    fn create_item(
        &self,
        value: &str,
        item_type: &str,
        version: &str,
    ) -> Result<i64, StoreError> {
        let mut t = self.write()?;
        if t.next_item_id == 0 {
            t.next_item_id = 1;
        }
        let id = t.next_item_id;
        t.next_item_id = t.next_item_id.saturating_add(1);
        t.items.insert(
            id,
            Item {
                id,
                value: value.to_string(),
                item_type: item_type.to_string(),
                version: version.to_string(),
            },
        );
        trace!(id, value, "created item");
        Ok(id)
    }

    fn delete_item(&self, id: i64) -> Result<u64, StoreError> {
        let mut t = self.write()?;
        Ok(if t.items.remove(&id).is_some() { 1 } else { 0 })
    }

    fn module(&self, id: i64) -> Result<Option<Module>, StoreError> {
        Ok(self.read()?.modules.get(&id).cloned())
    }

    fn modules(&self) -> Result<Vec<Module>, StoreError> {
        Ok(self.read()?.modules.values().cloned().collect())
    }

    fn create_module(&self, value: &str, version: &str) -> Result<i64, StoreError> {
        let mut t = self.write()?;
        if t.next_module_id == 0 {
            t.next_module_id = 1;
        }
        let id = t.next_module_id;
        t.next_module_id = t.next_module_id.saturating_add(1);
        t.node_for(id);
        t.modules.insert(
            id,
            Module {
                id,
                value: value.to_string(),
                version: version.to_string(),
            },
        );
        trace!(id, value, "created module");
        Ok(id)
    }

    fn delete_module(&self, id: i64) -> Result<u64, StoreError> {
        // The graph node and any dependency edges stay behind; the closure
        // is derived from the dependency edges alone, and edges outlive
        // module rows unless deleted explicitly.
        let mut t = self.write()?;
        Ok(if t.modules.remove(&id).is_some() { 1 } else { 0 })
    }

    fn item_module(&self, id: i64) -> Result<Option<ItemModule>, StoreError> {
        Ok(self.read()?.item_modules.get(&id).copied())
    }

    fn item_modules(&self) -> Result<Vec<ItemModule>, StoreError> {
        Ok(self.read()?.item_modules.values().copied().collect())
    }

    fn create_item_module(&self, item_id: i64, module_id: i64) -> Result<i64, StoreError> {
        let mut t = self.write()?;
        if t.next_item_module_id == 0 {
            t.next_item_module_id = 1;
        }
        let id = t.next_item_module_id;
        t.next_item_module_id = t.next_item_module_id.saturating_add(1);
        t.item_modules.insert(
            id,
            ItemModule {
                id,
                item_id,
                module_id,
            },
        );
        trace!(id, item_id, module_id, "created association");
        Ok(id)
    }

    fn delete_item_module(&self, id: i64) -> Result<u64, StoreError> {
        let mut t = self.write()?;
        Ok(if t.item_modules.remove(&id).is_some() { 1 } else { 0 })
    }

    fn module_dependencies(&self) -> Result<Vec<ModuleDependency>, StoreError> {
        let t = self.read()?;
        let mut deps: Vec<ModuleDependency> = t
            .graph
            .edge_indices()
            .filter_map(|e| t.dependency_at(e))
            .collect();
        deps.sort_by_key(|d| (d.dependent, d.dependee));
        Ok(deps)
    }

    fn dependencies_of_dependent(
        &self,
        dependent: i64,
    ) -> Result<Vec<ModuleDependency>, StoreError> {
        let mut deps: Vec<ModuleDependency> = self
            .module_dependencies()?
            .into_iter()
            .filter(|d| d.dependent == dependent)
            .collect();
        deps.sort_by_key(|d| d.dependee);
        Ok(deps)
    }

    fn dependencies_of_dependee(
        &self,
        dependee: i64,
    ) -> Result<Vec<ModuleDependency>, StoreError> {
        let mut deps: Vec<ModuleDependency> = self
            .module_dependencies()?
            .into_iter()
            .filter(|d| d.dependee == dependee)
            .collect();
        deps.sort_by_key(|d| d.dependent);
        Ok(deps)
    }

    fn create_module_dependency(&self, dependent: i64, dependee: i64) -> Result<(), StoreError> {
        let mut t = self.write()?;
        let from = t.node_for(dependent);
        let to = t.node_for(dependee);
        if t.graph.find_edge(from, to).is_some() {
            return Err(StoreError::Conflict {
                dependent,
                dependee,
            });
        }
        t.graph.add_edge(from, to, ());
        trace!(dependent, dependee, "created dependency edge");
        Ok(())
    }

    fn delete_module_dependency(&self, dependent: i64, dependee: i64) -> Result<u64, StoreError> {
        let mut t = self.write()?;
        let (Some(&from), Some(&to)) = (t.node_map.get(&dependent), t.node_map.get(&dependee))
        else {
            return Ok(0);
        };
        match t.graph.find_edge(from, to) {
            Some(edge) => {
                t.graph.remove_edge(edge);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_dependencies_by_dependent(&self, dependent: i64) -> Result<u64, StoreError> {
        let mut t = self.write()?;
        let Some(&idx) = t.node_map.get(&dependent) else {
            return Ok(0);
        };
        Ok(drain_edges(&mut t.graph, idx, Direction::Outgoing))
    }

    fn delete_dependencies_by_dependee(&self, dependee: i64) -> Result<u64, StoreError> {
        let mut t = self.write()?;
        let Some(&idx) = t.node_map.get(&dependee) else {
            return Ok(0);
        };
        Ok(drain_edges(&mut t.graph, idx, Direction::Incoming))
    }
}

/// Remove every edge touching `idx` in the given direction, one at a time.
/// `remove_edge` swap-removes, so pre-collected edge indices would dangle.
fn drain_edges(graph: &mut DiGraph<i64, ()>, idx: NodeIndex, direction: Direction) -> u64 {
    let mut count = 0;
    loop {
        let next = graph.edges_directed(idx, direction).next().map(|e| e.id());
        match next {
            Some(edge) => {
                graph.remove_edge(edge);
                count += 1;
            }
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    include!("memory.test.rs");
}
