//! Transitive dependency closure
//!
//! Breadth-first expansion over the store's `dependees_of` primitive.
//! Cycle safety comes from the visited set alone: a module is never
//! expanded twice, so self-loops and arbitrary cycles terminate.

use crate::store::{GraphSource, StoreError};
use std::collections::{BTreeSet, VecDeque};
use tracing::{debug, trace};

/// Expand `roots` into the set of all modules reachable by following
/// dependency edges outward, the roots included.
///
/// Empty roots yield an empty closure. A module id with no edges (known
/// or not) is simply a member that contributes nothing. The first store
/// error aborts the traversal; no partial closure is returned.
pub fn resolve<S: GraphSource + ?Sized>(
    source: &S,
    roots: &[i64],
) -> Result<BTreeSet<i64>, StoreError> {
    let mut visited: BTreeSet<i64> = roots.iter().copied().collect();
    let mut queue: VecDeque<i64> = visited.iter().copied().collect();

    while let Some(module) = queue.pop_front() {
        for dependee in source.dependees_of(module)? {
            if visited.insert(dependee) {
                trace!(module, dependee, "discovered dependee");
                queue.push_back(dependee);
            }
        }
    }

    debug!(roots = roots.len(), closure = visited.len(), "resolved closure");
    Ok(visited)
}

#[cfg(test)]
mod tests {
    include!("closure.test.rs");
}
