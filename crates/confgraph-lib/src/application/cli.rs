use crate::primitives::ConfigError;
use crate::wire::Encoding;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// confgraph CLI - configuration dependency graph management
#[derive(Debug, Clone, Parser)]
#[command(name = "confgraph")]
#[command(about = "Resolve configuration install sets from a module dependency graph")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// confgraph commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration: .env files, then env vars and CLI arguments
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::load_env_files()?;
        let cli = Cli::parse();
        cli.config.validate()?;
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Available confgraph commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Resolve modules to the items they require, dependencies included
    Resolve {
        /// Root module ids for the closure
        #[arg(help = "Module ids to resolve")]
        modules: Vec<i64>,

        /// JSON request with module references, instead of bare ids
        #[arg(
            long,
            value_name = "FILE",
            help = "Read a JSON array of module references ('-' for stdin)"
        )]
        request: Option<PathBuf>,

        /// Also list the resolved module closure
        #[arg(long, help = "Include the dependency closure's modules in the output")]
        with_modules: bool,

        /// Payload encoding
        #[arg(long, value_enum, default_value = "json", help = "Output encoding")]
        format: Encoding,
    },

    /// List configuration items
    Items,

    /// List modules
    Modules,

    /// List item-module associations
    Associations,

    /// List module dependency edges
    Dependencies,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
