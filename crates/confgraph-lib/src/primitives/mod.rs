//! confgraph primitives - core entity types, errors, and coordination
//!
//! Central collection of shared types that form the foundation of confgraph.
//! The entity types mirror the management schema: items are concrete
//! configuration artifacts, modules group them, associations tie the two
//! together, and dependencies form the directed module graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

fn is_zero(id: &i64) -> bool {
    *id == 0
}

/// A concrete configuration artifact.
///
/// Immutable once created: the management surface only inserts and deletes,
/// it never updates an item in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Value: {:?}, Type: {:?}, Version: {:?}",
            self.id, self.value, self.item_type, self.version
        )
    }
}

/// A named, versioned grouping of items, participating in the dependency
/// graph. Same lifecycle rules as [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl Module {
    /// An id-only module, as rendered in closure listings.
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            value: String::new(),
            version: String::new(),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Value: {:?}, Version: {:?}",
            self.id, self.value, self.version
        )
    }
}

/// Many-to-many association row between an item and a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemModule {
    pub id: i64,
    pub item_id: i64,
    pub module_id: i64,
}

impl fmt::Display for ItemModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, ItemID: {}, ModuleID: {}",
            self.id, self.item_id, self.module_id
        )
    }
}

/// Directed edge "dependent requires dependee". The (dependent, dependee)
/// pair is unique; self-loops and cycles are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDependency {
    pub dependent: i64,
    pub dependee: i64,
}

impl fmt::Display for ModuleDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dependent: {}, Dependee: {}", self.dependent, self.dependee)
    }
}

/// Incoming module reference as submitted by a resolution request.
///
/// Only the id is meaningful; any other fields travel along but are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    #[serde(default)]
    pub id: i64,
}

impl ModuleRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Map a numeric verbosity knob onto a level, saturating at trace.
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// Newline-delimited JSON
    Json,
}

/// Logger configuration derived from application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
}

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Missing required configuration: {field}")]
    MissingField { field: String },

    #[error("Configuration validation error: {reason}")]
    ValidationError { reason: String },

    #[error("Global configuration already initialized")]
    AlreadyInitialized,
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
