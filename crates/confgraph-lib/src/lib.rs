//! # confgraph Library
//!
//! Configuration dependency-graph management library.
//!
//! Tracks configuration items, the modules that group them, and a directed
//! depends-on graph between modules, and answers the recurring question:
//! given one or more modules, which items must be installed once everything
//! those modules transitively depend on is accounted for?
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation entity types and shared errors
//! - [`store`] - Graph store seams, the in-memory backend, and the
//!   definition-file loader
//! - [`resolve`] - Dependency closure resolution and item aggregation
//! - [`wire`] - Request validation and response encodings
//! - [`application`] - CLI interface and configuration management
//! - [`logger`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```no_run
//! // Initialize and run confgraph
//! confgraph_lib::main().unwrap();
//! ```

pub mod application;
pub mod logger;
pub mod primitives;
pub mod resolve;
pub mod store;
pub mod wire;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use primitives::{
    ConfigError, Item, ItemModule, LogFormat, LogLevel, LogOutput, LoggerError, Module,
    ModuleDependency, ModuleRef,
};
pub use resolve::{InstallSet, aggregate, resolve};
pub use store::{GraphSource, MemoryStore, Store, StoreError};
pub use wire::{Encoding, InstallResponse};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load configuration (defaults -> .env -> env vars -> CLI args)
    let config = CliConfig::load()?;
    Logger::init(config.app_config.to_logger_config())?;

    // Execute the command
    execute_command(config)
}
