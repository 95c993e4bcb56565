//! Application layer modules
//!
//! Organizes CLI interface, configuration management, and command dispatch.

pub mod cli;
pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig, Commands};
pub use commands::execute_command;
pub use config::AppConfig;
