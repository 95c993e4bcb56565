pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{DIAMOND_GRAPH, write_graph};
