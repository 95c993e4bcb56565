//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
}

/// Default value functions for configuration fields
mod default_fns {
    use crate::primitives::{LogFormat, LogOutput};

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Graph definition file describing items, modules, and dependencies
    #[arg(short, long, global = true, env = "CONFGRAPH_GRAPH")]
    #[serde(default)]
    pub graph: Option<PathBuf>,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, global = true, env = "CONFGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json)
    #[arg(long, global = true, env = "CONFGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, global = true, env = "CONFGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graph: None,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
        }
    }
}

impl AppConfig {
    /// Load .env files into the process environment so clap's env-backed
    /// arguments see them. Must run before argument parsing. A missing
    /// file is not an error.
    pub fn load_env_files() -> Result<(), ConfigError> {
        use dotenvy::from_filename;

        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                if !e.to_string().contains("not found") && !e.to_string().contains("No such file")
                {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge this config with another, taking the other's resolved values
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.graph.is_some() {
            self.graph = other.graph;
        }
        self.log_level = other.log_level;
        self.log_format = other.log_format;
        self.log_output = other.log_output;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level > 4 {
            return Err(ConfigError::ValidationError {
                reason: format!("log level {} out of range 0-4", self.log_level),
            });
        }
        Ok(())
    }

    /// The graph definition path, required by every data-bearing command.
    pub fn graph_path(&self) -> Result<&Path, ConfigError> {
        self.graph.as_deref().ok_or(ConfigError::MissingField {
            field: "graph (--graph or CONFGRAPH_GRAPH)".to_string(),
        })
    }

    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
