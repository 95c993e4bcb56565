//! Structured logging setup
//!
//! Thin wrapper over tracing-subscriber: env-filter based levels, text or
//! JSON formatting, stderr or stdout output, and a single global init.

use crate::primitives::{LogFormat, LogLevel, LogOutput, LoggerConfig, LoggerError};
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Logger handle returned by [`Logger::init`].
#[derive(Debug)]
pub struct Logger {
    _guard: (),
}

impl Logger {
    /// Initialize the global logger from application configuration.
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // RUST_LOG wins when set; otherwise derive the filter from config.
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level_str = match config.level {
                LogLevel::Error => "error",
                LogLevel::Warning => "warn",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            };
            EnvFilter::new(format!("confgraph={level_str},{level_str}"))
        });

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        GLOBAL_LOGGER
            .set(Logger { _guard: () })
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            "logger initialized"
        );

        Ok(GLOBAL_LOGGER.get().ok_or(LoggerError::InitializationFailed {
            reason: "global logger slot empty after set".to_string(),
        })?)
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
