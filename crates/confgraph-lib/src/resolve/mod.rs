//! Dependency closure resolution and item aggregation
//!
//! The one genuinely algorithmic corner of confgraph: expand a set of root
//! modules into the full dependency closure, then collect the deduplicated
//! set of items those modules carry.

pub mod aggregate;
pub mod closure;

pub use aggregate::{InstallSet, aggregate};
pub use closure::resolve;
