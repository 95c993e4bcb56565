//! Item aggregation over a dependency closure
//!
//! Maps a closure of modules to the union of their items. Items are
//! deduplicated by their `value`, not their row id: callers care about
//! "install this configuration value once", however many association
//! rows produced it. Two distinct rows with the same value deliberately
//! collapse into one.

use super::closure;
use crate::primitives::{Item, Module};
use crate::store::{GraphSource, StoreError};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregation result: the deduplicated items, and, when requested, the
/// closure's modules (id-only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSet {
    pub items: Vec<Item>,
    pub modules: Option<Vec<Module>>,
}

/// Resolve `roots` to their closure and collect every associated item.
///
/// An empty closure yields an empty item set, not an error. The first
/// store error aborts the aggregation with no partial result.
pub fn aggregate<S: GraphSource + ?Sized>(
    source: &S,
    roots: &[i64],
    include_modules: bool,
) -> Result<InstallSet, StoreError> {
    let closure = closure::resolve(source, roots)?;

    // Keyed by value, so later rows with a colliding value replace
    // earlier ones.
    let mut by_value: BTreeMap<String, Item> = BTreeMap::new();
    for &module in &closure {
        for item in source.items_of(module)? {
            by_value.insert(item.value.clone(), item);
        }
    }

    debug!(
        modules = closure.len(),
        items = by_value.len(),
        "aggregated install set"
    );

    let modules =
        include_modules.then(|| closure.iter().map(|&id| Module::with_id(id)).collect());

    Ok(InstallSet {
        items: by_value.into_values().collect(),
        modules,
    })
}

#[cfg(test)]
mod tests {
    include!("aggregate.test.rs");
}
