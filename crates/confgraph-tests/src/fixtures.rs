//! Fixture graphs for end-to-end CLI tests

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Diamond dependency graph: app -> {ui, net} -> base, with a shared
/// configuration value attached to both middle modules.
///
/// Module ids: 1=app, 2=ui, 3=net, 4=base.
pub const DIAMOND_GRAPH: &str = r#"
[[items]]
id = 1
value = "app.conf"
type = "ini"
version = "1.0"

[[items]]
id = 2
value = "ui.conf"
type = "ini"
version = "1.0"

[[items]]
id = 3
value = "net.conf"
type = "ini"
version = "1.0"

[[items]]
id = 4
value = "base.conf"
type = "ini"
version = "1.0"

[[items]]
id = 5
value = "shared.conf"
type = "ini"
version = "1.0"

[[items]]
id = 6
value = "shared.conf"
type = "ini"
version = "2.0"

[[modules]]
id = 1
value = "app"
version = "1.0"

[[modules]]
id = 2
value = "ui"
version = "1.0"

[[modules]]
id = 3
value = "net"
version = "1.0"

[[modules]]
id = 4
value = "base"
version = "1.0"

[[associations]]
item = 1
module = 1

[[associations]]
item = 2
module = 2

[[associations]]
item = 3
module = 3

[[associations]]
item = 4
module = 4

# Two distinct item rows with the same value, one per middle module.
[[associations]]
item = 5
module = 2

[[associations]]
item = 6
module = 3

[[dependencies]]
dependent = 1
dependee = 2

[[dependencies]]
dependent = 1
dependee = 3

[[dependencies]]
dependent = 2
dependee = 4

[[dependencies]]
dependent = 3
dependee = 4
"#;

/// Write a graph definition into a temp directory and hand back its path.
pub fn write_graph(dir: &TempDir, content: &str) -> Result<PathBuf> {
    let path = dir.path().join("graph.toml");
    std::fs::write(&path, content)?;
    Ok(path)
}
